/// What a data row carries in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    Blank,
    Date,
    Time,
    UtcOffset,
    Latitude,
    Longitude,
    AltitudeMsl,
    GroundSpeed,
    Pitch,
    Roll,
    Heading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub unit: &'static str,
    pub width: usize,
    pub content: Content,
}

const fn column(name: &'static str, unit: &'static str, width: usize, content: Content) -> Column {
    Column {
        name,
        unit,
        width,
        content,
    }
}

const fn blank(name: &'static str, unit: &'static str, width: usize) -> Column {
    column(name, unit, width, Content::Blank)
}

pub const COLUMN_COUNT: usize = 44;

/// Data rows stop after `HDG`; the trailing radio columns only appear in the header.
pub const ROW_COLUMNS: usize = 40;

pub const COLUMNS: [Column; COLUMN_COUNT] = [
    column("Lcl Date", "#yyy-mm-dd", 10, Content::Date),
    column("Lcl Time", "hh:mm:ss", 8, Content::Time),
    column("UTCOfst", "hh:mm", 7, Content::UtcOffset),
    blank("AtvWpt", "ident", 7),
    column("Latitude", "degrees", 12, Content::Latitude),
    column("Longitude", "degrees", 13, Content::Longitude),
    blank("AltB", "ft Baro", 8),
    blank("BaroA", "inch", 6),
    column("AltMSL", "ft msl", 8, Content::AltitudeMsl),
    blank("OAT", "deg C", 6),
    blank("IAS", "kt", 7),
    column("GndSpd", "kt", 7, Content::GroundSpeed),
    blank("VSpd", "fpm", 8),
    column("Pitch", "deg", 7, Content::Pitch),
    column("Roll", "deg", 6, Content::Roll),
    blank("LatAc", "G", 7),
    blank("NormAc", "G", 8),
    blank("TRK", "deg", 5),
    blank("volt1", "volts", 6),
    blank("amp1", "amps", 6),
    blank("FQtyL", "gals", 7),
    blank("FQtyR", "gals", 7),
    blank("E1 FFlow", "gph", 9),
    blank("E1 FPres", "psi", 9),
    blank("E1 OilT", "deg F", 8),
    blank("E1 OilP", "psi", 8),
    blank("E1 MAP", "Hg", 7),
    blank("E1 RPM", "rpm", 7),
    blank("E1 CHT1", "deg F", 8),
    blank("E1 CHT2", "deg F", 8),
    blank("E1 CHT3", "deg F", 8),
    blank("E1 CHT4", "deg F", 8),
    blank("E1 EGT1", "deg F", 8),
    blank("E1 EGT2", "deg F", 8),
    blank("E1 EGT3", "deg F", 8),
    blank("E1 EGT4", "deg F", 8),
    blank("AltGPS", "ft wgs", 8),
    blank("TAS", "kt", 4),
    blank("HSIS", "enum", 5),
    column("HDG", "deg", 5, Content::Heading),
    blank("CRS", "deg", 6),
    blank("NAV1", "MHz", 7),
    blank("NAV2", "MHz", 7),
    blank("COM1", "MHz", 8),
];
