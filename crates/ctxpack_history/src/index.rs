use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use regex::Regex;
use std::{fmt::Display, sync::LazyLock};

pub(crate) const INDEX_FILE: &str = "index.md";

pub(crate) const INDEX_HEADER: &str = "| V | Data | Arq |\n|---|---|---|\n";

static VERSION_CELL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\| v(\d+) \|").unwrap());

/// File name of the snapshot for `version`.
pub(crate) fn snapshot_file_name(version: u32) -> String {
    format!("v{version}_context.md")
}

/// Latest version recorded in an index, taken from the last `| v<N> |` cell.
///
/// A cell whose number does not fit a `u32` is an error rather than "no
/// versions", which would restart numbering and overwrite `v1`.
pub(crate) fn latest_version(index: &str) -> Result<Option<u32>> {
    let Some(caps) = VERSION_CELL.captures_iter(index).last() else {
        return Ok(None);
    };
    let digits = &caps[1];
    digits
        .parse()
        .map(Some)
        .with_context(|| format!("Version v{digits} in the snapshot index is out of range"))
}

/// Index row for a new snapshot, timestamped as `dd/mm/yyyy, HH:MM:SS`.
pub(crate) fn index_row<Tz>(version: u32, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let file = snapshot_file_name(version);
    format!("| v{version} | {} | [{file}](./{file}) |\n", at.format("%d/%m/%Y, %H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn test_snapshot_file_name() {
        assert_eq!(snapshot_file_name(7), "v7_context.md");
    }

    #[test]
    fn test_latest_version_uses_last_row() {
        let index = format!(
            "{INDEX_HEADER}| v1 | a | [v1_context.md](./v1_context.md) |\n| v2 | b | [v2_context.md](./v2_context.md) |\n"
        );
        assert_eq!(latest_version(&index).unwrap(), Some(2));
    }

    #[test]
    fn test_latest_version_is_positional_not_maximum() {
        let index = "| v9 | x | y |\n| v3 | x | y |\n";
        assert_eq!(latest_version(index).unwrap(), Some(3));
    }

    #[test]
    fn test_latest_version_without_rows() {
        assert_eq!(latest_version(INDEX_HEADER).unwrap(), None);
        assert_eq!(latest_version("").unwrap(), None);
    }

    #[test]
    fn test_latest_version_at_u32_max() {
        let index = format!("| v{} | x | y |\n", u32::MAX);
        assert_eq!(latest_version(&index).unwrap(), Some(u32::MAX));
    }

    #[test]
    fn test_latest_version_out_of_range_is_an_error() {
        let index = "| v1 | x | y |\n| v4294967296 | x | y |\n";

        let err = latest_version(index).unwrap_err();

        assert!(err.to_string().contains("v4294967296"));
    }

    #[test]
    fn test_index_row_format() {
        let at = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(
            index_row(12, &at),
            "| v12 | 04/03/2026, 05:06:07 | [v12_context.md](./v12_context.md) |\n"
        );
    }
}
