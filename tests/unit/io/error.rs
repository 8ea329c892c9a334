//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use brickwall::AlgorithmError;
    use brickwall::io::error::invalid_parameter;
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = AlgorithmError::FileSystem {
            path: "/tmp/walls.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(AlgorithmError::Cancelled.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("width", &-1, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("width"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be positive"));
    }

    // Tests the limit error names both numbers
    // Verified by swapping count and limit in the message
    #[test]
    fn test_too_many_walls_error() {
        let error = AlgorithmError::TooManyWalls {
            count: 125,
            limit: 10,
        };
        assert_eq!(
            error.to_string(),
            "Request produces 125 walls, more than the limit of 10"
        );
    }

    // Tests messages of variants without payload sources
    // Verified by sharing one message across worker failures
    #[test]
    fn test_worker_error_messages() {
        assert_eq!(
            AlgorithmError::Cancelled.to_string(),
            "Enumeration was cancelled"
        );
        assert_eq!(
            AlgorithmError::WorkerPanicked.to_string(),
            "Worker thread panicked"
        );
        assert_ne!(
            AlgorithmError::WorkerDisconnected.to_string(),
            AlgorithmError::WorkerPanicked.to_string()
        );
    }

    // Tests NoWalls and CountOverflow formatting
    // Verified by omitting the height from messages
    #[test]
    fn test_dimension_error_messages() {
        let error = AlgorithmError::NoWalls {
            width: 3,
            height: 7,
        };
        assert_eq!(
            error.to_string(),
            "No walls exist for width 3 and height 7"
        );

        let error = AlgorithmError::CountOverflow {
            rows: 20569,
            height: 256,
        };
        let message = error.to_string();
        assert!(message.contains("20569"));
        assert!(message.contains("256"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = AlgorithmError::ImageExport {
            path: "/root/sheet.png".into(),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/root/sheet.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests conversions from library errors
    // Verified by mapping JSON errors to file system errors
    #[test]
    fn test_error_conversions() {
        let json_error = serde_json::from_str::<u8>("not json").err();
        let Some(json_error) = json_error else {
            unreachable!("invalid JSON must fail");
        };
        let error = AlgorithmError::from(json_error);
        assert!(matches!(error, AlgorithmError::Serialization { .. }));
        assert!(error.source().is_some());

        let error = AlgorithmError::from(std::io::Error::other("broken pipe"));
        match error {
            AlgorithmError::FileSystem { path, .. } => {
                assert_eq!(path.to_string_lossy(), "<unknown>");
            }
            _ => unreachable!("Expected FileSystem error type"),
        }
    }
}
