//! Append-only JSONL event log

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::StatsResult;
use crate::types::GameEvent;
use crate::utils::atomic_write_json_lines;
use crate::validation::validate_stored_event;

pub(crate) struct EventLog {
    path: PathBuf,
    file: File,
}

impl EventLog {
    /// Open `path` for appending, creating it if missing
    ///
    /// A trailing line without its newline is cut off first, otherwise the
    /// next append would be glued onto it.
    pub(crate) fn open(path: &Path) -> io::Result<Self> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(path)?;
        let dropped = truncate_torn_tail(&mut file)?;
        if dropped > 0 {
            tracing::warn!(
                path = %path.display(),
                bytes = dropped,
                "Truncated incomplete trailing event"
            );
        }
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Read every parseable event from `path`
    ///
    /// Lines that fail to parse are logged and skipped so one torn write
    /// does not take the rest of the log with it.
    pub(crate) fn replay(path: &Path) -> io::Result<Vec<GameEvent>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(path)?);
        let mut events = Vec::new();

        for (line_num, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            if line.trim().is_empty() {
                continue;
            }

            let event = match GameEvent::from_json_line(&line) {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        line = line_num + 1,
                        error = %e,
                        "Skipping unreadable event"
                    );
                    continue;
                }
            };
            match validate_stored_event(&event) {
                Ok(()) => events.push(event),
                Err(reason) => tracing::warn!(
                    path = %path.display(),
                    line = line_num + 1,
                    event_id = event.id,
                    %reason,
                    "Skipping invalid event"
                ),
            }
        }

        Ok(events)
    }

    /// Append one event and flush it to disk
    pub(crate) fn append(&mut self, event: &GameEvent) -> StatsResult<()> {
        let json_line = event.to_json_line()?;
        writeln!(self.file, "{}", json_line)?;
        self.file.sync_data()?;
        Ok(())
    }

    /// Replace the log contents with `events`
    pub(crate) fn rewrite<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a GameEvent>,
    ) -> io::Result<()> {
        atomic_write_json_lines(&self.path, events)?;
        // The old handle still points at the replaced inode.
        self.file = OpenOptions::new().append(true).open(&self.path)?;
        Ok(())
    }

    pub(crate) fn sync(&self) -> io::Result<()> {
        self.file.sync_all()
    }
}

/// Cut `file` back to its last newline, returning how many bytes went
fn truncate_torn_tail(file: &mut File) -> io::Result<u64> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(0);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    if last[0] == b'\n' {
        return Ok(0);
    }

    let mut content = Vec::new();
    file.seek(SeekFrom::Start(0))?;
    file.read_to_end(&mut content)?;
    let keep = content
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |pos| pos as u64 + 1);
    file.set_len(keep)?;
    file.sync_all()?;
    Ok(len - keep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventType;
    use chrono::{TimeZone, Utc};
    use std::fs;
    use tempfile::TempDir;

    fn event(id: u64, game_id: i64) -> GameEvent {
        GameEvent {
            id,
            game_id,
            event_type: EventType::Foul,
            player_id: None,
            player_name: "Bam Adebayo".to_string(),
            team: Some("Heat".to_string()),
            quarter: 2,
            time_remaining: Some("4:12".to_string()),
            description: None,
            timestamp: Utc.with_ymd_and_hms(2024, 2, 1, 20, 0, id as u32).unwrap(),
        }
    }

    #[test]
    fn test_append_then_replay() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.jsonl");

        let mut log = EventLog::open(&path).unwrap();
        log.append(&event(1, 3)).unwrap();
        log.append(&event(2, 3)).unwrap();

        let events = EventLog::replay(&path).unwrap();
        assert_eq!(events, vec![event(1, 3), event(2, 3)]);
    }

    #[test]
    fn test_replay_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let events = EventLog::replay(&temp_dir.path().join("events.jsonl")).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_replay_skips_bad_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.jsonl");
        let good = event(1, 3).to_json_line().unwrap();
        fs::write(&path, format!("{}\n{{\"id\":\n\n", good)).unwrap();

        assert_eq!(EventLog::replay(&path).unwrap(), vec![event(1, 3)]);
    }

    #[test]
    fn test_replay_skips_events_breaking_invariants() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.jsonl");
        let mut overtime_nine = event(2, 3);
        overtime_nine.quarter = 9;
        let mut nameless = event(3, 3);
        nameless.player_name = String::new();

        let lines: Vec<String> = [event(1, 3), overtime_nine, nameless]
            .iter()
            .map(|e| e.to_json_line().unwrap())
            .collect();
        fs::write(&path, lines.join("\n") + "\n").unwrap();

        assert_eq!(EventLog::replay(&path).unwrap(), vec![event(1, 3)]);
    }

    #[test]
    fn test_open_cuts_torn_tail() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.jsonl");
        let good = event(1, 3).to_json_line().unwrap();
        fs::write(&path, format!("{}\n{{\"id\":2,\"game_id\":3,\"event_ty", good)).unwrap();

        let mut log = EventLog::open(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), format!("{}\n", good));

        log.append(&event(2, 3)).unwrap();
        assert_eq!(EventLog::replay(&path).unwrap(), vec![event(1, 3), event(2, 3)]);
    }

    #[test]
    fn test_open_keeps_complete_log() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.jsonl");
        let content = format!("{}\n", event(1, 3).to_json_line().unwrap());
        fs::write(&path, &content).unwrap();

        EventLog::open(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_rewrite_then_append() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.jsonl");

        let mut log = EventLog::open(&path).unwrap();
        for id in 1..=3 {
            log.append(&event(id, id as i64)).unwrap();
        }

        let kept = vec![event(1, 1), event(3, 3)];
        log.rewrite(&kept).unwrap();
        log.append(&event(4, 4)).unwrap();

        let ids: Vec<u64> = EventLog::replay(&path).unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }
}
