/// Row-to-row compatibility relation built once per width
pub mod compatibility;
/// Cut point sets and the pairwise compatibility test
pub mod cuts;
/// Row generation as compositions of the wall width
pub mod rows;
/// Wall enumeration, counting and sampling
pub mod walls;
/// Background enumeration with progress and cancellation
pub mod worker;
