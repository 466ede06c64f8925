use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{bail, Context, Result};
use touch_gestures::{Contact, ContactFrame, ContactPhase};

pub const TRACE_HEADER: &str = "frame,ms,count,phase0,x0,y0,phase1,x1,y1";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayFrame {
    pub ms: u64,
    pub frame: ContactFrame,
}

pub fn read_trace(path: &Path) -> Result<Vec<ReplayFrame>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_trace(BufReader::new(file), &path.display().to_string())
}

pub fn parse_trace(reader: impl BufRead, origin: &str) -> Result<Vec<ReplayFrame>> {
    let mut out = Vec::new();
    let mut last_ms: Option<u64> = None;

    for (line_no, line_result) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line_result.with_context(|| format!("failed to read {origin}:{line_no}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed == TRACE_HEADER {
            continue;
        }

        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if parts[0] != "frame" {
            continue;
        }
        if parts.len() < 3 {
            bail!("{origin}:{line_no} invalid frame line, expected at least 3 columns");
        }

        let ms = parse_number::<u64>(parts[1], origin, line_no, "ms")?;
        if let Some(prev) = last_ms {
            if ms < prev {
                log::warn!("{origin}:{line_no} timestamp {ms} goes back from {prev}");
            }
        }
        last_ms = Some(ms);

        let count = parse_number::<u8>(parts[2], origin, line_no, "count")?;
        let frame = match count {
            0 => ContactFrame::empty(),
            1 => ContactFrame::single(parse_contact(&parts, 0, origin, line_no)?),
            2 => ContactFrame::pair(
                parse_contact(&parts, 0, origin, line_no)?,
                parse_contact(&parts, 1, origin, line_no)?,
            ),
            other => bail!("{origin}:{line_no} count {other} out of range, expected 0..=2"),
        };

        out.push(ReplayFrame { ms, frame });
    }

    Ok(out)
}

fn parse_contact(parts: &[&str], slot: usize, origin: &str, line_no: usize) -> Result<Contact> {
    let base = 3 + slot * 3;
    if parts.len() < base + 3 {
        bail!(
            "{origin}:{line_no} missing columns for contact {slot}, expected phase{slot},x{slot},y{slot}"
        );
    }

    let phase = ContactPhase::parse(parts[base]).with_context(|| {
        format!(
            "{origin}:{line_no} invalid phase{slot} '{}', expected down|move|up",
            parts[base]
        )
    })?;
    let x = parse_number::<i32>(parts[base + 1], origin, line_no, "x")?;
    let y = parse_number::<i32>(parts[base + 2], origin, line_no, "y")?;
    Ok(Contact::new(phase, x, y))
}

fn parse_number<T>(raw: &str, origin: &str, line_no: usize, field: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse::<T>()
        .with_context(|| format!("{origin}:{line_no} invalid {field} '{raw}'"))
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn parses_frames_and_skips_noise() -> Result<()> {
        let text = "\
# captured on a test panel
frame,ms,count,phase0,x0,y0,phase1,x1,y1
frame,0,1,down,100,200
note,ignored,line
frame,16,2,move,110,200,down,5100,200

frame,32,0
";
        let frames = parse_trace(text.as_bytes(), "inline")?;
        assert_eq!(frames.len(), 3);
        assert_eq!(
            frames[0].frame,
            ContactFrame::single(Contact::new(ContactPhase::Down, 100, 200))
        );
        assert_eq!(frames[1].ms, 16);
        assert_eq!(
            frames[1].frame.secondary(),
            Some(Contact::new(ContactPhase::Down, 5100, 200))
        );
        assert!(frames[2].frame.is_empty());
        Ok(())
    }

    #[test]
    fn negative_coordinates_are_accepted() -> Result<()> {
        let frames = parse_trace("frame,5,1,up,-300,-1".as_bytes(), "inline")?;
        assert_eq!(
            frames[0].frame.primary(),
            Some(Contact::new(ContactPhase::Up, -300, -1))
        );
        Ok(())
    }

    #[test]
    fn reports_line_and_field_on_error() {
        let err = parse_trace("frame,0,1,down,1,2\nframe,x,1,up,1,2".as_bytes(), "t.csv")
            .expect_err("bad ms");
        assert!(format!("{err:#}").contains("t.csv:2 invalid ms 'x'"));

        let err = parse_trace("frame,0,1,hover,1,2".as_bytes(), "t.csv").expect_err("bad phase");
        assert!(format!("{err:#}").contains("invalid phase0 'hover'"));

        let err = parse_trace("frame,0,2,down,1,2".as_bytes(), "t.csv").expect_err("short");
        assert!(format!("{err:#}").contains("missing columns for contact 1"));

        let err = parse_trace("frame,0,3,down,1,2".as_bytes(), "t.csv").expect_err("count");
        assert!(format!("{err:#}").contains("count 3 out of range"));
    }

    #[test]
    fn reads_trace_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "{TRACE_HEADER}")?;
        writeln!(file, "frame,0,1,down,0,0")?;
        writeln!(file, "frame,40,1,up,0,0")?;
        file.flush()?;

        let frames = read_trace(file.path())?;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].ms, 40);
        Ok(())
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.csv");
        let err = read_trace(&path).expect_err("missing");
        assert!(err.to_string().contains("absent.csv"));
    }
}
