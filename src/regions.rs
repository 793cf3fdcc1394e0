//! Static region reference data for the state selector

/// One selectable region: postal abbreviation plus display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionEntry {
    pub code: &'static str,
    pub name: &'static str,
}

const fn region(code: &'static str, name: &'static str) -> RegionEntry {
    RegionEntry { code, name }
}

/// The 50 US states plus the District of Columbia, alphabetical by name.
/// The selector preserves this order.
pub const US_STATES: &[RegionEntry] = &[
    region("AL", "Alabama"),
    region("AK", "Alaska"),
    region("AZ", "Arizona"),
    region("AR", "Arkansas"),
    region("CA", "California"),
    region("CO", "Colorado"),
    region("CT", "Connecticut"),
    region("DE", "Delaware"),
    region("DC", "District of Columbia"),
    region("FL", "Florida"),
    region("GA", "Georgia"),
    region("HI", "Hawaii"),
    region("ID", "Idaho"),
    region("IL", "Illinois"),
    region("IN", "Indiana"),
    region("IA", "Iowa"),
    region("KS", "Kansas"),
    region("KY", "Kentucky"),
    region("LA", "Louisiana"),
    region("ME", "Maine"),
    region("MD", "Maryland"),
    region("MA", "Massachusetts"),
    region("MI", "Michigan"),
    region("MN", "Minnesota"),
    region("MS", "Mississippi"),
    region("MO", "Missouri"),
    region("MT", "Montana"),
    region("NE", "Nebraska"),
    region("NV", "Nevada"),
    region("NH", "New Hampshire"),
    region("NJ", "New Jersey"),
    region("NM", "New Mexico"),
    region("NY", "New York"),
    region("NC", "North Carolina"),
    region("ND", "North Dakota"),
    region("OH", "Ohio"),
    region("OK", "Oklahoma"),
    region("OR", "Oregon"),
    region("PA", "Pennsylvania"),
    region("RI", "Rhode Island"),
    region("SC", "South Carolina"),
    region("SD", "South Dakota"),
    region("TN", "Tennessee"),
    region("TX", "Texas"),
    region("UT", "Utah"),
    region("VT", "Vermont"),
    region("VA", "Virginia"),
    region("WA", "Washington"),
    region("WV", "West Virginia"),
    region("WI", "Wisconsin"),
    region("WY", "Wyoming"),
];
