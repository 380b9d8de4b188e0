//! Tests for command-line parsing and room processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use log::LevelFilter;
    use std::fs;
    use std::path::PathBuf;
    use tatami::LayoutError;
    use tatami::algorithm::StopReason;
    use tatami::io::cli::{Cli, RoomProcessor, RoomSource};
    use tatami::io::configuration::DEFAULT_CELL_SIZE;
    use tempfile::TempDir;

    fn run(args: &[&str]) -> (Result<Vec<tatami::io::cli::RoomSummary>, LayoutError>, String) {
        let cli = Cli::parse_from(args);
        let mut processor = RoomProcessor::new(cli);
        let mut out = Vec::new();
        let result = processor.process_to(&mut out);
        (result, String::from_utf8_lossy(&out).into_owned())
    }

    // Tests CLI parsing with only the target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "room.txt"]);

        assert_eq!(cli.target, Some(PathBuf::from("room.txt")));
        assert_eq!(cli.cell_size, DEFAULT_CELL_SIZE);
        assert_eq!(cli.limit, None);
        assert!(!cli.quiet);
        assert!(!cli.count);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming the short flag of height
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program", "-H", "3", "-w", "4", "-l", "5", "-t", "9", "-c", "-C", "-i", "-a", "-o",
            "out", "--cell-size", "16", "-q", "-vv",
        ]);

        assert_eq!(cli.target, None);
        assert_eq!((cli.height, cli.width), (Some(3), Some(4)));
        assert_eq!(cli.limit, Some(5));
        assert_eq!(cli.timeout, Some(9));
        assert!(cli.count && cli.corners && cli.image && cli.animate && cli.quiet);
        assert_eq!(cli.output, Some(PathBuf::from("out")));
        assert_eq!(cli.cell_size, 16);
        assert_eq!(cli.verbose, 2);
    }

    // Tests log level selection from quiet and verbose flags
    // Verified by letting verbose override quiet
    #[test]
    fn test_log_level() {
        fn level(args: &[&str]) -> LevelFilter {
            Cli::parse_from(args).log_level()
        }
        assert_eq!(level(&["program"]), LevelFilter::Warn);
        assert_eq!(level(&["program", "-v"]), LevelFilter::Info);
        assert_eq!(level(&["program", "-vv"]), LevelFilter::Debug);
        assert_eq!(level(&["program", "-vvvv"]), LevelFilter::Trace);
        assert_eq!(level(&["program", "-q", "-vv"]), LevelFilter::Error);
    }

    // Tests limits built from flags
    // Verified by ignoring the timeout flag
    #[test]
    fn test_search_limits() {
        let limits = Cli::parse_from(["program", "-l", "2", "-t", "60"]).search_limits();
        assert_eq!(limits.max_solutions, Some(2));
        assert!(limits.deadline.is_some());

        let unbounded = Cli::parse_from(["program"]).search_limits();
        assert_eq!(unbounded.max_solutions, None);
        assert_eq!(unbounded.deadline, None);
    }

    // Tests room sources from dimensions, with a single size meaning a square
    // Verified by defaulting a missing height to one
    #[test]
    fn test_collect_open_rooms() {
        let processor = RoomProcessor::new(Cli::parse_from(["program", "-w", "3", "-q"]));
        assert_eq!(
            processor.collect_rooms().ok(),
            Some(vec![RoomSource::Open { rows: 3, cols: 3 }])
        );

        let processor = RoomProcessor::new(Cli::parse_from(["program", "-H", "2", "-w", "5"]));
        let rooms = processor.collect_rooms().unwrap_or_default();
        assert_eq!(rooms, vec![RoomSource::Open { rows: 2, cols: 5 }]);
        assert_eq!(rooms.first().map(RoomSource::name), Some("room_2x5".to_string()));
    }

    // Tests a directory yields its room files in sorted order
    // Verified by removing the extension filter
    #[test]
    fn test_collect_directory_rooms() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("b.txt"), "1 2\n. .\n").expect("Failed to write room");
        fs::write(temp_dir.path().join("a.txt"), "1 2\n. .\n").expect("Failed to write room");
        fs::write(temp_dir.path().join("notes.md"), "ignored").expect("Failed to write notes");

        let target = temp_dir.path().to_string_lossy().to_string();
        let processor = RoomProcessor::new(Cli::parse_from(["program", target.as_str()]));
        let names: Vec<String> = processor
            .collect_rooms()
            .unwrap_or_default()
            .iter()
            .map(RoomSource::name)
            .collect();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    // Tests missing targets are reported
    // Verified by falling back to a default room size
    #[test]
    fn test_missing_target() {
        let (result, _) = run(&["program", "-q"]);
        assert!(matches!(
            result,
            Err(LayoutError::InvalidParameter {
                parameter: "target",
                ..
            })
        ));

        let (result, _) = run(&["program", "-q", "no/such/room.txt"]);
        assert!(result.is_err());
    }

    // Tests the textual report of an open room
    // Verified by printing solutions bottom row first
    #[test]
    fn test_report_open_room() {
        let (result, output) = run(&["program", "-q", "-H", "2", "-w", "2"]);
        let summaries = result.expect("Failed to process room");

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries.first().map(|s| s.solutions), Some(2));
        assert_eq!(
            output,
            "room_2x2: 2x2 room, 4 placeable cells\n . . \n . . \n\
             solution 1:\n ⊏ ⊐ \n ⊏ ⊐ \n\
             solution 2:\n ⊓ ⊓ \n ⊔ ⊔ \n\
             room_2x2: 2 solutions\n"
        );
    }

    // Tests count mode and corner output
    // Verified by printing solutions in count mode
    #[test]
    fn test_report_count_and_corners() {
        let (result, output) = run(&["program", "-q", "-c", "-C", "-H", "1", "-w", "2"]);
        assert!(result.is_ok());
        assert!(!output.contains("solution 1:"));
        assert!(output.contains("0 0 0\n0 0 0\n"));
        assert!(output.ends_with("room_1x2: 1 solutions\n"));
    }

    // Tests early stop is reported in the summary
    // Verified by dropping the stop reason from the summary line
    #[test]
    fn test_report_limit() {
        let (result, output) = run(&["program", "-q", "-c", "-l", "1", "-H", "2", "-w", "3"]);
        let summaries = result.expect("Failed to process room");
        assert_eq!(
            summaries.first().and_then(|s| s.stopped),
            Some(StopReason::SolutionLimit)
        );
        assert!(output.contains("(stopped: solution limit reached)"));
    }

    // Tests rooms from a file and image output next to a chosen directory
    // Verified by writing images next to the room file
    #[test]
    fn test_process_file_with_images() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let room = temp_dir.path().join("hall.txt");
        fs::write(&room, "2 2\n. .\n. .\n").expect("Failed to write room");
        let out_dir = temp_dir.path().join("renders");

        let room_arg = room.to_string_lossy().to_string();
        let out_arg = out_dir.to_string_lossy().to_string();
        let (result, output) = run(&[
            "program",
            room_arg.as_str(),
            "-q",
            "-i",
            "-a",
            "--cell-size",
            "6",
            "-o",
            out_arg.as_str(),
        ]);

        assert!(result.is_ok(), "Processing failed: {result:?}");
        assert!(output.starts_with("hall: 2x2 room"));
        assert!(out_dir.join("hall_solution_1.png").exists());
        assert!(out_dir.join("hall_solution_2.png").exists());
        assert!(out_dir.join("hall_solutions.gif").exists());
        assert!(!temp_dir.path().join("hall_solution_1.png").exists());
    }

    // Tests animation is skipped when there is nothing to animate
    // Verified by propagating the empty export error
    #[test]
    fn test_animation_skipped_without_solutions() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let room = temp_dir.path().join("odd.txt");
        fs::write(&room, "1 3\n. # .\n").expect("Failed to write room");

        let room_arg = room.to_string_lossy().to_string();
        let (result, output) = run(&["program", room_arg.as_str(), "-q", "-a"]);

        assert!(result.is_ok());
        assert!(output.ends_with("odd: 0 solutions\n"));
        assert!(!temp_dir.path().join("odd_solutions.gif").exists());
    }

    // Tests a malformed room file aborts processing
    // Verified by skipping rooms that fail to parse
    #[test]
    fn test_process_malformed_room() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let room = temp_dir.path().join("bad.txt");
        fs::write(&room, "2 2\n. .\n").expect("Failed to write room");

        let room_arg = room.to_string_lossy().to_string();
        let (result, _) = run(&["program", room_arg.as_str(), "-q"]);
        assert!(matches!(result, Err(LayoutError::RoomFormat { .. })));
    }

    // Tests progress display runs through a full room
    // Verified by starting rooms after completion
    #[test]
    fn test_process_with_progress() {
        let (result, _) = run(&["program", "-H", "2", "-w", "3"]);
        assert_eq!(result.ok().map(|s| s.len()), Some(1));
    }
}
