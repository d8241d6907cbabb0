use chrono::{DateTime, Utc};

use super::schema::{Column, Content, COLUMNS, ROW_COLUMNS};
use crate::track::{Track, TrackPoint};

const SEPARATOR: &str = ",";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airframe {
    pub model: String,
    pub ident: String,
}

pub fn airframe_info_line(airframe: &Airframe) -> String {
    format!(
        "#airframe_info, log_version=\"1.00\", airframe_name=\"{}\", \
         unit_software_part_number=\"000-A0000-0A\", unit_software_version=\"9.00\", \
         system_software_part_number=\"000-A0000-00\", system_id=\"{}\", mode=NORMAL,",
        airframe.model.to_uppercase(),
        airframe.ident.to_uppercase()
    )
}

pub fn units_row() -> String {
    label_row(|c| c.unit)
}

pub fn header_row() -> String {
    label_row(|c| c.name)
}

fn label_row(label: impl Fn(&Column) -> &'static str) -> String {
    COLUMNS
        .iter()
        .map(|c| format!("{:>width$}", label(c), width = c.width))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

pub fn render_row(point: &TrackPoint) -> String {
    COLUMNS[..ROW_COLUMNS]
        .iter()
        .map(|c| render_cell(c, point))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

fn render_cell(column: &Column, point: &TrackPoint) -> String {
    let width = column.width;
    match column.content {
        Content::Blank => " ".repeat(width),
        Content::Date => format!("{:>width$}", point.date()),
        Content::Time => format!("{:>width$}", point.time()),
        Content::UtcOffset => format!("{:>width$}", point.utc_offset()),
        Content::Latitude => format!("{:<width$}", point.latitude),
        Content::Longitude => format!("{:<width$}", point.longitude),
        Content::AltitudeMsl => format!("{:>width$}", point.altitude_feet),
        Content::GroundSpeed => optional(point.speed_knots, width),
        Content::Pitch => format!("{:>width$}", point.pitch()),
        Content::Roll => format!("{:>width$}", point.bank()),
        Content::Heading => optional(point.heading_degrees, width),
    }
}

/// Values a single point track cannot derive are left blank.
fn optional(value: Option<i64>, width: usize) -> String {
    match value {
        Some(v) => format!("{v:>width$}"),
        None => " ".repeat(width),
    }
}

/// Full log: airframe preamble, unit and column-name header rows, then every
/// track's rows in the order given.
pub fn render_log(airframe: &Airframe, tracks: &[Track]) -> String {
    let rows: usize = tracks.iter().map(Track::len).sum();
    let mut lines = Vec::with_capacity(rows + 3);
    lines.push(airframe_info_line(airframe));
    lines.push(units_row());
    lines.push(header_row());
    lines.extend(tracks.iter().flat_map(|t| t.points.iter().map(render_row)));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn default_file_name(ident: &str, start: DateTime<Utc>) -> String {
    format!(
        "{}-{}.csv",
        ident.to_uppercase(),
        start.format("%Y-%m-%d_%H:%M")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::g1000::schema::COLUMN_COUNT;
    use chrono::TimeZone;

    const ROW_TEMPLATE: &str = "<date>,<time>,<utc-offset>,       ,<lat>,<lon>,        ,      ,<alt>,      ,       ,<spd>,        ,<pitch>,<bank>,       ,        ,     ,      ,      ,       ,       ,         ,         ,        ,        ,       ,       ,        ,        ,        ,        ,        ,        ,        ,        ,        ,    ,     ,<hdg>";

    fn point(speed: Option<i64>, heading: Option<i64>) -> TrackPoint {
        TrackPoint {
            latitude: 40.01,
            longitude: -70.01,
            altitude_feet: 656,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap(),
            speed_knots: speed,
            heading_degrees: heading,
        }
    }

    fn airframe() -> Airframe {
        Airframe {
            model: "c172s".into(),
            ident: "n123ab".into(),
        }
    }

    #[test]
    fn row_matches_layout() {
        let expected = ROW_TEMPLATE
            .replace("<date>", "2024-03-01")
            .replace("<time>", "09:05:07")
            .replace("<utc-offset>", " -00:00")
            .replace("<lat>", "40.01       ")
            .replace("<lon>", "-70.01       ")
            .replace("<alt>", "     656")
            .replace("<spd>", "     45")
            .replace("<pitch>", "      0")
            .replace("<bank>", "     0")
            .replace("<hdg>", "  322");
        assert_eq!(render_row(&point(Some(45), Some(322))), expected);
    }

    #[test]
    fn undefined_values_render_blank() {
        let row = render_row(&point(None, None));
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), ROW_COLUMNS);
        assert_eq!(fields[11], "       ");
        assert_eq!(fields[ROW_COLUMNS - 1], "     ");
        assert!(!row.contains("undefined"));
    }

    #[test]
    fn header_rows_have_every_column() {
        let units = units_row();
        let header = header_row();
        assert_eq!(units.split(',').count(), COLUMN_COUNT);
        assert_eq!(header.split(',').count(), COLUMN_COUNT);
        assert!(units.starts_with("#yyy-mm-dd,hh:mm:ss,  hh:mm,  ident,"));
        assert!(header.starts_with("  Lcl Date,Lcl Time,UTCOfst, AtvWpt,    Latitude,    Longitude,"));
        assert!(header.ends_with("  HDG,   CRS,   NAV1,   NAV2,    COM1"));
    }

    #[test]
    fn airframe_line_is_upper_cased() {
        assert_eq!(
            airframe_info_line(&airframe()),
            "#airframe_info, log_version=\"1.00\", airframe_name=\"C172S\", \
             unit_software_part_number=\"000-A0000-0A\", unit_software_version=\"9.00\", \
             system_software_part_number=\"000-A0000-00\", system_id=\"N123AB\", mode=NORMAL,"
        );
    }

    #[test]
    fn log_layout() {
        let track = Track {
            points: vec![point(Some(45), Some(322)), point(Some(46), Some(321))],
        };
        let log = render_log(&airframe(), &[track.clone(), track]);
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines.len(), 3 + 4);
        assert!(lines[0].starts_with("#airframe_info"));
        assert_eq!(lines[1], units_row());
        assert_eq!(lines[2], header_row());
        assert!(lines[3..].iter().all(|l| l.starts_with("2024-03-01,09:05:07")));
        assert!(log.ends_with('\n'));
    }

    #[test]
    fn file_name_uses_ident_and_start() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap();
        assert_eq!(default_file_name("n123ab", start), "N123AB-2024-03-01_09:05.csv");
    }
}
