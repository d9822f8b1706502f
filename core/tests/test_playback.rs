//! Log playback tests

use std::time::Duration;

use novadeploy_core::models::build_log::LogMode;
use novadeploy_core::playback::{script, LogSequencer, PlaybackOptions};

fn sequencer() -> LogSequencer {
    LogSequencer::new(PlaybackOptions::default())
}

#[tokio::test(start_paused = true)]
async fn test_git_script_plays_in_order() {
    let sequencer = sequencer();
    sequencer.play(LogMode::Git);

    tokio::time::sleep(Duration::from_secs(10)).await;

    let lines = sequencer.buffer().snapshot();
    assert_eq!(lines, script(LogMode::Git));
    assert!(!sequencer.is_replaying());
}

#[tokio::test(start_paused = true)]
async fn test_lines_arrive_one_at_a_time() {
    let sequencer = sequencer();
    let interval = PlaybackOptions::default().interval;
    sequencer.play(LogMode::Git);

    for expected in 1..=6 {
        // Half an interval past each offset, exactly `expected` lines exist
        tokio::time::sleep(interval / 2).await;
        assert_eq!(sequencer.buffer().len(), expected);
        if expected < 6 {
            assert!(sequencer.is_replaying());
            tokio::time::sleep(interval / 2).await;
        }
    }

    assert!(!sequencer.is_replaying());
}

#[tokio::test(start_paused = true)]
async fn test_mode_switch_discards_unfinished_script() {
    let sequencer = sequencer();
    sequencer.play(LogMode::Git);

    // Let roughly half the git script through
    tokio::time::sleep(Duration::from_millis(3000)).await;
    assert!(sequencer.buffer().len() < 6);
    assert!(!sequencer.buffer().is_empty());

    sequencer.play(LogMode::Manual);
    tokio::time::sleep(Duration::from_secs(10)).await;

    // Exactly the manual script, none of the interrupted git lines
    let lines = sequencer.buffer().snapshot();
    assert_eq!(lines, script(LogMode::Manual));
}

#[tokio::test(start_paused = true)]
async fn test_replay_resets_buffer() {
    let sequencer = sequencer();
    sequencer.play(LogMode::Manual);
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(sequencer.buffer().len(), 6);

    sequencer.play(LogMode::Manual);
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(sequencer.buffer().len(), 1);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(sequencer.buffer().snapshot(), script(LogMode::Manual));
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_playback_stops_emitting() {
    let sequencer = sequencer();
    let ticket = sequencer.play(LogMode::Git);

    tokio::time::sleep(Duration::from_millis(1500)).await;
    let emitted = sequencer.buffer().len();
    ticket.timer.cancel();

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(sequencer.buffer().len(), emitted);
}
