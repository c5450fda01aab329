/// Reference entry for one airport. The table covers the airports present in
/// the current provider payloads; anything else resolves to a WIB placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportInfo {
    pub code: String,
    pub city: String,
    pub name: String,
    pub timezone: &'static str,
}

/// Look up an airport by IATA code, case-insensitively. Unknown codes yield a
/// placeholder entry that echoes the code as the city.
pub fn detail(code: &str) -> AirportInfo {
    let code = code.to_ascii_uppercase();
    let (city, name, timezone) = match code.as_str() {
        "CGK" => ("Jakarta", "Soekarno-Hatta International Airport", "WIB"),
        "DPS" => ("Denpasar", "I Gusti Ngurah Rai International Airport", "WITA"),
        "SUB" => ("Surabaya", "Juanda International Airport", "WIB"),
        _ => {
            return AirportInfo {
                city: code.clone(),
                code,
                name: "Unknown Airport".to_string(),
                timezone: "WIB",
            }
        }
    };
    AirportInfo {
        code,
        city: city.to_string(),
        name: name.to_string(),
        timezone,
    }
}

pub fn city_name(code: &str) -> String {
    detail(code).city
}
