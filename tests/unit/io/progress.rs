//! Tests for the progress display fed by worker events

#[cfg(test)]
mod tests {
    use brickwall::algorithm::walls::{Progress, Strategy};
    use brickwall::algorithm::worker::{WallRequest, WallTask};
    use brickwall::io::progress::ProgressManager;

    // Tests updates set both length and position
    // Verified by leaving the length at zero
    #[test]
    fn test_progress_updates() {
        let pm = ProgressManager::hidden();
        pm.start(WallRequest::new(4, 3), Strategy::Levels);
        assert_eq!(pm.position(), 0);

        pm.update(Progress {
            completed: 2,
            total: 3,
        });
        assert_eq!(pm.position(), 2);
        assert_eq!(pm.length(), Some(3));

        pm.finish(125);
        assert_eq!(pm.length(), Some(3));
    }

    // Tests the bar follows a real worker to completion
    // Verified by updating only on the first event
    #[test]
    fn test_progress_follows_worker() {
        let pm = ProgressManager::hidden();
        let request = WallRequest::new(4, 2);
        pm.start(request, Strategy::DepthFirst);

        let Ok(task) = WallTask::spawn(request, Strategy::DepthFirst) else {
            unreachable!("thread creation succeeds in tests");
        };
        let walls = task.wait(|progress| pm.update(progress));

        assert_eq!(walls.map(|walls| walls.len()).ok(), Some(27));
        assert_eq!(pm.position(), 8);
        assert_eq!(pm.length(), Some(8));
        pm.abandon();
    }

    // Tests restarting resets the position
    // Verified by keeping the previous position on start
    #[test]
    fn test_progress_restart() {
        let pm = ProgressManager::default();
        pm.update(Progress {
            completed: 4,
            total: 4,
        });
        pm.start(WallRequest::new(2, 4), Strategy::Levels);
        assert_eq!(pm.position(), 0);
        pm.abandon();
    }
}
