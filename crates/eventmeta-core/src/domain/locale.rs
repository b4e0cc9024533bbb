//! Locale parsing and ISO 3166 country conversion.

use serde::{Deserialize, Serialize};

/// Language and region of the default locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Lower-case language subtag (e.g., "en").
    pub language: String,
    /// Upper-case region subtag (e.g., "US" or "419"), if any.
    pub region: Option<String>,
}

impl Locale {
    pub fn new(language: impl Into<String>, region: Option<String>) -> Self {
        Self {
            language: language.into(),
            region,
        }
    }

    /// Parse a POSIX (`en_US.UTF-8@euro`) or BCP-47 (`zh-Hans-CN`) locale name.
    ///
    /// Returns `None` for empty input. `C` and `POSIX` parse to a locale
    /// without region.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let raw = raw.split('@').next().unwrap_or(raw);
        let raw = raw.split('.').next().unwrap_or(raw);

        let mut subtags = raw.split(['_', '-']).filter(|s| !s.is_empty());
        let language = subtags.next()?.to_ascii_lowercase();

        // Script subtags (four letters) and variants are skipped.
        let region = subtags
            .find(|s| is_alpha_region(s) || is_numeric_region(s))
            .map(str::to_ascii_uppercase);

        Some(Self { language, region })
    }

    /// ISO 3166-1 alpha-3 code for the region.
    ///
    /// `None` when there is no region, or the region is numeric or unknown.
    pub fn iso3_country(&self) -> Option<&'static str> {
        self.region.as_deref().and_then(iso3_for_alpha2)
    }
}

fn is_alpha_region(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_numeric_region(s: &str) -> bool {
    s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Look up the alpha-3 code for an alpha-2 country code (case-insensitive).
pub fn iso3_for_alpha2(alpha2: &str) -> Option<&'static str> {
    let upper = alpha2.to_ascii_uppercase();
    ISO3166_ALPHA2_TO_ALPHA3
        .binary_search_by(|(a2, _)| (*a2).cmp(upper.as_str()))
        .ok()
        .map(|idx| ISO3166_ALPHA2_TO_ALPHA3[idx].1)
}

/// ISO 3166-1 alpha-2 to alpha-3 codes, sorted by alpha-2.
static ISO3166_ALPHA2_TO_ALPHA3: &[(&str, &str)] = &[
    ("AD", "AND"), ("AE", "ARE"), ("AF", "AFG"), ("AG", "ATG"), ("AI", "AIA"),
    ("AL", "ALB"), ("AM", "ARM"), ("AO", "AGO"), ("AQ", "ATA"), ("AR", "ARG"),
    ("AS", "ASM"), ("AT", "AUT"), ("AU", "AUS"), ("AW", "ABW"), ("AX", "ALA"),
    ("AZ", "AZE"), ("BA", "BIH"), ("BB", "BRB"), ("BD", "BGD"), ("BE", "BEL"),
    ("BF", "BFA"), ("BG", "BGR"), ("BH", "BHR"), ("BI", "BDI"), ("BJ", "BEN"),
    ("BL", "BLM"), ("BM", "BMU"), ("BN", "BRN"), ("BO", "BOL"), ("BQ", "BES"),
    ("BR", "BRA"), ("BS", "BHS"), ("BT", "BTN"), ("BV", "BVT"), ("BW", "BWA"),
    ("BY", "BLR"), ("BZ", "BLZ"), ("CA", "CAN"), ("CC", "CCK"), ("CD", "COD"),
    ("CF", "CAF"), ("CG", "COG"), ("CH", "CHE"), ("CI", "CIV"), ("CK", "COK"),
    ("CL", "CHL"), ("CM", "CMR"), ("CN", "CHN"), ("CO", "COL"), ("CR", "CRI"),
    ("CU", "CUB"), ("CV", "CPV"), ("CW", "CUW"), ("CX", "CXR"), ("CY", "CYP"),
    ("CZ", "CZE"), ("DE", "DEU"), ("DJ", "DJI"), ("DK", "DNK"), ("DM", "DMA"),
    ("DO", "DOM"), ("DZ", "DZA"), ("EC", "ECU"), ("EE", "EST"), ("EG", "EGY"),
    ("EH", "ESH"), ("ER", "ERI"), ("ES", "ESP"), ("ET", "ETH"), ("FI", "FIN"),
    ("FJ", "FJI"), ("FK", "FLK"), ("FM", "FSM"), ("FO", "FRO"), ("FR", "FRA"),
    ("GA", "GAB"), ("GB", "GBR"), ("GD", "GRD"), ("GE", "GEO"), ("GF", "GUF"),
    ("GG", "GGY"), ("GH", "GHA"), ("GI", "GIB"), ("GL", "GRL"), ("GM", "GMB"),
    ("GN", "GIN"), ("GP", "GLP"), ("GQ", "GNQ"), ("GR", "GRC"), ("GS", "SGS"),
    ("GT", "GTM"), ("GU", "GUM"), ("GW", "GNB"), ("GY", "GUY"), ("HK", "HKG"),
    ("HM", "HMD"), ("HN", "HND"), ("HR", "HRV"), ("HT", "HTI"), ("HU", "HUN"),
    ("ID", "IDN"), ("IE", "IRL"), ("IL", "ISR"), ("IM", "IMN"), ("IN", "IND"),
    ("IO", "IOT"), ("IQ", "IRQ"), ("IR", "IRN"), ("IS", "ISL"), ("IT", "ITA"),
    ("JE", "JEY"), ("JM", "JAM"), ("JO", "JOR"), ("JP", "JPN"), ("KE", "KEN"),
    ("KG", "KGZ"), ("KH", "KHM"), ("KI", "KIR"), ("KM", "COM"), ("KN", "KNA"),
    ("KP", "PRK"), ("KR", "KOR"), ("KW", "KWT"), ("KY", "CYM"), ("KZ", "KAZ"),
    ("LA", "LAO"), ("LB", "LBN"), ("LC", "LCA"), ("LI", "LIE"), ("LK", "LKA"),
    ("LR", "LBR"), ("LS", "LSO"), ("LT", "LTU"), ("LU", "LUX"), ("LV", "LVA"),
    ("LY", "LBY"), ("MA", "MAR"), ("MC", "MCO"), ("MD", "MDA"), ("ME", "MNE"),
    ("MF", "MAF"), ("MG", "MDG"), ("MH", "MHL"), ("MK", "MKD"), ("ML", "MLI"),
    ("MM", "MMR"), ("MN", "MNG"), ("MO", "MAC"), ("MP", "MNP"), ("MQ", "MTQ"),
    ("MR", "MRT"), ("MS", "MSR"), ("MT", "MLT"), ("MU", "MUS"), ("MV", "MDV"),
    ("MW", "MWI"), ("MX", "MEX"), ("MY", "MYS"), ("MZ", "MOZ"), ("NA", "NAM"),
    ("NC", "NCL"), ("NE", "NER"), ("NF", "NFK"), ("NG", "NGA"), ("NI", "NIC"),
    ("NL", "NLD"), ("NO", "NOR"), ("NP", "NPL"), ("NR", "NRU"), ("NU", "NIU"),
    ("NZ", "NZL"), ("OM", "OMN"), ("PA", "PAN"), ("PE", "PER"), ("PF", "PYF"),
    ("PG", "PNG"), ("PH", "PHL"), ("PK", "PAK"), ("PL", "POL"), ("PM", "SPM"),
    ("PN", "PCN"), ("PR", "PRI"), ("PS", "PSE"), ("PT", "PRT"), ("PW", "PLW"),
    ("PY", "PRY"), ("QA", "QAT"), ("RE", "REU"), ("RO", "ROU"), ("RS", "SRB"),
    ("RU", "RUS"), ("RW", "RWA"), ("SA", "SAU"), ("SB", "SLB"), ("SC", "SYC"),
    ("SD", "SDN"), ("SE", "SWE"), ("SG", "SGP"), ("SH", "SHN"), ("SI", "SVN"),
    ("SJ", "SJM"), ("SK", "SVK"), ("SL", "SLE"), ("SM", "SMR"), ("SN", "SEN"),
    ("SO", "SOM"), ("SR", "SUR"), ("SS", "SSD"), ("ST", "STP"), ("SV", "SLV"),
    ("SX", "SXM"), ("SY", "SYR"), ("SZ", "SWZ"), ("TC", "TCA"), ("TD", "TCD"),
    ("TF", "ATF"), ("TG", "TGO"), ("TH", "THA"), ("TJ", "TJK"), ("TK", "TKL"),
    ("TL", "TLS"), ("TM", "TKM"), ("TN", "TUN"), ("TO", "TON"), ("TR", "TUR"),
    ("TT", "TTO"), ("TV", "TUV"), ("TW", "TWN"), ("TZ", "TZA"), ("UA", "UKR"),
    ("UG", "UGA"), ("UM", "UMI"), ("US", "USA"), ("UY", "URY"), ("UZ", "UZB"),
    ("VA", "VAT"), ("VC", "VCT"), ("VE", "VEN"), ("VG", "VGB"), ("VI", "VIR"),
    ("VN", "VNM"), ("VU", "VUT"), ("WF", "WLF"), ("WS", "WSM"), ("YE", "YEM"),
    ("YT", "MYT"), ("ZA", "ZAF"), ("ZM", "ZMB"), ("ZW", "ZWE"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sorted_and_well_formed() {
        assert_eq!(ISO3166_ALPHA2_TO_ALPHA3.len(), 249);
        assert!(
            ISO3166_ALPHA2_TO_ALPHA3
                .windows(2)
                .all(|pair| pair[0].0 < pair[1].0)
        );
        assert!(
            ISO3166_ALPHA2_TO_ALPHA3
                .iter()
                .all(|(a2, a3)| a2.len() == 2 && a3.len() == 3)
        );
    }

    #[test]
    fn test_parse_posix_locale() {
        let locale = Locale::parse("en_US.UTF-8").unwrap();
        assert_eq!(locale, Locale::new("en", Some("US".to_string())));

        let locale = Locale::parse("de_DE.ISO-8859-15@euro").unwrap();
        assert_eq!(locale.region.as_deref(), Some("DE"));
    }

    #[test]
    fn test_parse_bcp47_with_script() {
        let locale = Locale::parse("zh-Hans-CN").unwrap();
        assert_eq!(locale.language, "zh");
        assert_eq!(locale.region.as_deref(), Some("CN"));
        assert_eq!(locale.iso3_country(), Some("CHN"));
    }

    #[test]
    fn test_parse_without_region() {
        assert_eq!(Locale::parse("C"), Some(Locale::new("c", None)));
        assert_eq!(Locale::parse("POSIX").unwrap().region, None);
        assert_eq!(Locale::parse("fr").unwrap().iso3_country(), None);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse("  "), None);
        assert_eq!(Locale::parse(".UTF-8"), None);
    }

    #[test]
    fn test_numeric_region_has_no_iso3() {
        let locale = Locale::parse("es_419").unwrap();
        assert_eq!(locale.region.as_deref(), Some("419"));
        assert_eq!(locale.iso3_country(), None);
    }

    #[test]
    fn test_iso3_lookup() {
        assert_eq!(iso3_for_alpha2("US"), Some("USA"));
        assert_eq!(iso3_for_alpha2("gb"), Some("GBR"));
        assert_eq!(iso3_for_alpha2("KM"), Some("COM"));
        assert_eq!(iso3_for_alpha2("ZZ"), None);
        assert_eq!(iso3_for_alpha2("USA"), None);
    }
}
