// ═══════════════════════════════════════════════════════════════════════
// Static board data: the 71 places of the Fury of Dracula map and the
// road, rail and boat connections between them.
// Nothing here changes during a game.
// ═══════════════════════════════════════════════════════════════════════

use crate::types::{PlaceId, PlaceType, Transport};

/// Static description of a board place (compile-time constant).
#[derive(Debug, Clone)]
pub struct PlaceDef {
    pub id: PlaceId,
    pub name: &'static str,
    /// Two-letter code used at the output boundary.
    pub code: &'static str,
    pub place_type: PlaceType,
    /// Land place with at least one boat connection.
    pub port: bool,
}

impl PlaceDef {
    pub fn is_land(&self) -> bool { self.place_type == PlaceType::Land }
    pub fn is_sea(&self) -> bool { self.place_type == PlaceType::Sea }
    pub fn is_port(&self) -> bool { self.port }
}

// ── Place ID constants ─────────────────────────────────────────────────
// Alphabetical by name.

pub const ADRIATIC_SEA:          PlaceId = PlaceId(0);
pub const ALICANTE:              PlaceId = PlaceId(1);
pub const AMSTERDAM:             PlaceId = PlaceId(2);
pub const ATHENS:                PlaceId = PlaceId(3);
pub const ATLANTIC_OCEAN:        PlaceId = PlaceId(4);
pub const BARCELONA:             PlaceId = PlaceId(5);
pub const BARI:                  PlaceId = PlaceId(6);
pub const BAY_OF_BISCAY:         PlaceId = PlaceId(7);
pub const BELGRADE:              PlaceId = PlaceId(8);
pub const BERLIN:                PlaceId = PlaceId(9);
pub const BLACK_SEA:             PlaceId = PlaceId(10);
pub const BORDEAUX:              PlaceId = PlaceId(11);
pub const BRUSSELS:              PlaceId = PlaceId(12);
pub const BUCHAREST:             PlaceId = PlaceId(13);
pub const BUDAPEST:              PlaceId = PlaceId(14);
pub const CADIZ:                 PlaceId = PlaceId(15);
pub const CAGLIARI:              PlaceId = PlaceId(16);
pub const CASTLE_DRACULA:        PlaceId = PlaceId(17);
pub const CLERMONT_FERRAND:      PlaceId = PlaceId(18);
pub const COLOGNE:               PlaceId = PlaceId(19);
pub const CONSTANTA:             PlaceId = PlaceId(20);
pub const DUBLIN:                PlaceId = PlaceId(21);
pub const EDINBURGH:             PlaceId = PlaceId(22);
pub const ENGLISH_CHANNEL:       PlaceId = PlaceId(23);
pub const FLORENCE:              PlaceId = PlaceId(24);
pub const FRANKFURT:             PlaceId = PlaceId(25);
pub const GALATZ:                PlaceId = PlaceId(26);
pub const GALWAY:                PlaceId = PlaceId(27);
pub const GENEVA:                PlaceId = PlaceId(28);
pub const GENOA:                 PlaceId = PlaceId(29);
pub const GRANADA:               PlaceId = PlaceId(30);
pub const HAMBURG:               PlaceId = PlaceId(31);
pub const IONIAN_SEA:            PlaceId = PlaceId(32);
pub const IRISH_SEA:             PlaceId = PlaceId(33);
pub const KLAUSENBURG:           PlaceId = PlaceId(34);
pub const LE_HAVRE:              PlaceId = PlaceId(35);
pub const LEIPZIG:               PlaceId = PlaceId(36);
pub const LISBON:                PlaceId = PlaceId(37);
pub const LIVERPOOL:             PlaceId = PlaceId(38);
pub const LONDON:                PlaceId = PlaceId(39);
pub const MADRID:                PlaceId = PlaceId(40);
pub const MANCHESTER:            PlaceId = PlaceId(41);
pub const MARSEILLES:            PlaceId = PlaceId(42);
pub const MEDITERRANEAN_SEA:     PlaceId = PlaceId(43);
pub const MILAN:                 PlaceId = PlaceId(44);
pub const MUNICH:                PlaceId = PlaceId(45);
pub const NANTES:                PlaceId = PlaceId(46);
pub const NAPLES:                PlaceId = PlaceId(47);
pub const NORTH_SEA:             PlaceId = PlaceId(48);
pub const NUREMBURG:             PlaceId = PlaceId(49);
pub const PARIS:                 PlaceId = PlaceId(50);
pub const PLYMOUTH:              PlaceId = PlaceId(51);
pub const PRAGUE:                PlaceId = PlaceId(52);
pub const ROME:                  PlaceId = PlaceId(53);
pub const SALONICA:              PlaceId = PlaceId(54);
pub const SANTANDER:             PlaceId = PlaceId(55);
pub const SARAGOSSA:             PlaceId = PlaceId(56);
pub const SARAJEVO:              PlaceId = PlaceId(57);
pub const SOFIA:                 PlaceId = PlaceId(58);
pub const ST_JOSEPH_AND_ST_MARY: PlaceId = PlaceId(59);
pub const STRASBOURG:            PlaceId = PlaceId(60);
pub const SWANSEA:               PlaceId = PlaceId(61);
pub const SZEGED:                PlaceId = PlaceId(62);
pub const TOULOUSE:              PlaceId = PlaceId(63);
pub const TYRRHENIAN_SEA:        PlaceId = PlaceId(64);
pub const VALONA:                PlaceId = PlaceId(65);
pub const VARNA:                 PlaceId = PlaceId(66);
pub const VENICE:                PlaceId = PlaceId(67);
pub const VIENNA:                PlaceId = PlaceId(68);
pub const ZAGREB:                PlaceId = PlaceId(69);
pub const ZURICH:                PlaceId = PlaceId(70);

pub const NUM_PLACES: usize = 71;

pub const HOSPITAL: PlaceId = ST_JOSEPH_AND_ST_MARY;

// ── Static place definitions ───────────────────────────────────────────

macro_rules! land {
    ($name:expr, $code:expr, $id:expr) => {
        PlaceDef { id: $id, name: $name, code: $code, place_type: PlaceType::Land, port: false }
    };
}

macro_rules! port {
    ($name:expr, $code:expr, $id:expr) => {
        PlaceDef { id: $id, name: $name, code: $code, place_type: PlaceType::Land, port: true }
    };
}

macro_rules! sea {
    ($name:expr, $code:expr, $id:expr) => {
        PlaceDef { id: $id, name: $name, code: $code, place_type: PlaceType::Sea, port: false }
    };
}

pub static PLACES: [PlaceDef; NUM_PLACES] = [
    sea!("Adriatic Sea", "AS", ADRIATIC_SEA),
    port!("Alicante", "AL", ALICANTE),
    port!("Amsterdam", "AM", AMSTERDAM),
    port!("Athens", "AT", ATHENS),
    sea!("Atlantic Ocean", "AO", ATLANTIC_OCEAN),
    port!("Barcelona", "BA", BARCELONA),
    port!("Bari", "BI", BARI),
    sea!("Bay of Biscay", "BB", BAY_OF_BISCAY),
    land!("Belgrade", "BE", BELGRADE),
    land!("Berlin", "BR", BERLIN),
    sea!("Black Sea", "BS", BLACK_SEA),
    port!("Bordeaux", "BO", BORDEAUX),
    land!("Brussels", "BU", BRUSSELS),
    land!("Bucharest", "BC", BUCHAREST),
    land!("Budapest", "BD", BUDAPEST),
    port!("Cadiz", "CA", CADIZ),
    port!("Cagliari", "CG", CAGLIARI),
    land!("Castle Dracula", "CD", CASTLE_DRACULA),
    land!("Clermont-Ferrand", "CF", CLERMONT_FERRAND),
    land!("Cologne", "CO", COLOGNE),
    port!("Constanta", "CN", CONSTANTA),
    port!("Dublin", "DU", DUBLIN),
    port!("Edinburgh", "ED", EDINBURGH),
    sea!("English Channel", "EC", ENGLISH_CHANNEL),
    land!("Florence", "FL", FLORENCE),
    land!("Frankfurt", "FR", FRANKFURT),
    land!("Galatz", "GA", GALATZ),
    port!("Galway", "GW", GALWAY),
    land!("Geneva", "GE", GENEVA),
    port!("Genoa", "GO", GENOA),
    land!("Granada", "GR", GRANADA),
    port!("Hamburg", "HA", HAMBURG),
    sea!("Ionian Sea", "IO", IONIAN_SEA),
    sea!("Irish Sea", "IR", IRISH_SEA),
    land!("Klausenburg", "KL", KLAUSENBURG),
    port!("Le Havre", "LE", LE_HAVRE),
    land!("Leipzig", "LI", LEIPZIG),
    port!("Lisbon", "LS", LISBON),
    port!("Liverpool", "LV", LIVERPOOL),
    port!("London", "LO", LONDON),
    land!("Madrid", "MA", MADRID),
    land!("Manchester", "MN", MANCHESTER),
    port!("Marseilles", "MR", MARSEILLES),
    sea!("Mediterranean Sea", "MS", MEDITERRANEAN_SEA),
    land!("Milan", "MI", MILAN),
    land!("Munich", "MU", MUNICH),
    port!("Nantes", "NA", NANTES),
    port!("Naples", "NP", NAPLES),
    sea!("North Sea", "NS", NORTH_SEA),
    land!("Nuremburg", "NU", NUREMBURG),
    land!("Paris", "PA", PARIS),
    port!("Plymouth", "PL", PLYMOUTH),
    land!("Prague", "PR", PRAGUE),
    port!("Rome", "RO", ROME),
    port!("Salonica", "SA", SALONICA),
    port!("Santander", "SN", SANTANDER),
    land!("Saragossa", "SR", SARAGOSSA),
    land!("Sarajevo", "SJ", SARAJEVO),
    land!("Sofia", "SO", SOFIA),
    land!("St Joseph and St Mary", "JM", ST_JOSEPH_AND_ST_MARY),
    land!("Strasbourg", "ST", STRASBOURG),
    port!("Swansea", "SW", SWANSEA),
    land!("Szeged", "SZ", SZEGED),
    land!("Toulouse", "TO", TOULOUSE),
    sea!("Tyrrhenian Sea", "TS", TYRRHENIAN_SEA),
    port!("Valona", "VA", VALONA),
    port!("Varna", "VR", VARNA),
    port!("Venice", "VE", VENICE),
    land!("Vienna", "VI", VIENNA),
    land!("Zagreb", "ZA", ZAGREB),
    land!("Zurich", "ZU", ZURICH),
];

// ── Connections ────────────────────────────────────────────────────────
// Each undirected connection is listed once.

pub static ROADS: &[(PlaceId, PlaceId)] = &[
    (ALICANTE, GRANADA), (ALICANTE, MADRID), (ALICANTE, SARAGOSSA),
    (AMSTERDAM, BRUSSELS), (AMSTERDAM, COLOGNE),
    (ATHENS, VALONA),
    (BARCELONA, SARAGOSSA), (BARCELONA, TOULOUSE),
    (BARI, NAPLES), (BARI, ROME),
    (BELGRADE, BUCHAREST), (BELGRADE, KLAUSENBURG), (BELGRADE, SARAJEVO),
    (BELGRADE, SOFIA), (BELGRADE, ST_JOSEPH_AND_ST_MARY), (BELGRADE, SZEGED),
    (BERLIN, HAMBURG), (BERLIN, LEIPZIG), (BERLIN, PRAGUE),
    (BORDEAUX, CLERMONT_FERRAND), (BORDEAUX, NANTES), (BORDEAUX, SARAGOSSA), (BORDEAUX, TOULOUSE),
    (BRUSSELS, COLOGNE), (BRUSSELS, LE_HAVRE), (BRUSSELS, PARIS), (BRUSSELS, STRASBOURG),
    (BUCHAREST, CONSTANTA), (BUCHAREST, GALATZ), (BUCHAREST, KLAUSENBURG), (BUCHAREST, SOFIA),
    (BUDAPEST, KLAUSENBURG), (BUDAPEST, SZEGED), (BUDAPEST, VIENNA), (BUDAPEST, ZAGREB),
    (CADIZ, GRANADA), (CADIZ, LISBON), (CADIZ, MADRID),
    (CASTLE_DRACULA, GALATZ), (CASTLE_DRACULA, KLAUSENBURG),
    (CLERMONT_FERRAND, GENEVA), (CLERMONT_FERRAND, MARSEILLES), (CLERMONT_FERRAND, NANTES),
    (CLERMONT_FERRAND, PARIS), (CLERMONT_FERRAND, TOULOUSE),
    (COLOGNE, FRANKFURT), (COLOGNE, HAMBURG), (COLOGNE, LEIPZIG), (COLOGNE, STRASBOURG),
    (CONSTANTA, GALATZ), (CONSTANTA, VARNA),
    (DUBLIN, GALWAY),
    (EDINBURGH, MANCHESTER),
    (FLORENCE, GENOA), (FLORENCE, ROME), (FLORENCE, VENICE),
    (FRANKFURT, LEIPZIG), (FRANKFURT, NUREMBURG), (FRANKFURT, STRASBOURG),
    (GALATZ, KLAUSENBURG),
    (GENEVA, MARSEILLES), (GENEVA, PARIS), (GENEVA, STRASBOURG), (GENEVA, ZURICH),
    (GENOA, MARSEILLES), (GENOA, MILAN), (GENOA, VENICE),
    (GRANADA, MADRID),
    (HAMBURG, LEIPZIG),
    (KLAUSENBURG, SZEGED),
    (LE_HAVRE, NANTES), (LE_HAVRE, PARIS),
    (LEIPZIG, NUREMBURG),
    (LISBON, MADRID), (LISBON, SANTANDER),
    (LIVERPOOL, MANCHESTER), (LIVERPOOL, SWANSEA),
    (LONDON, MANCHESTER), (LONDON, PLYMOUTH), (LONDON, SWANSEA),
    (MADRID, SANTANDER), (MADRID, SARAGOSSA),
    (MARSEILLES, MILAN), (MARSEILLES, TOULOUSE), (MARSEILLES, ZURICH),
    (MILAN, MUNICH), (MILAN, VENICE), (MILAN, ZURICH),
    (MUNICH, NUREMBURG), (MUNICH, STRASBOURG), (MUNICH, VENICE),
    (MUNICH, VIENNA), (MUNICH, ZAGREB), (MUNICH, ZURICH),
    (NANTES, PARIS),
    (NAPLES, ROME),
    (NUREMBURG, PRAGUE), (NUREMBURG, STRASBOURG),
    (PARIS, STRASBOURG),
    (PRAGUE, VIENNA),
    (SALONICA, SOFIA), (SALONICA, VALONA),
    (SANTANDER, SARAGOSSA),
    (SARAGOSSA, TOULOUSE),
    (SARAJEVO, SOFIA), (SARAJEVO, ST_JOSEPH_AND_ST_MARY), (SARAJEVO, VALONA), (SARAJEVO, ZAGREB),
    (SOFIA, VALONA), (SOFIA, VARNA),
    (STRASBOURG, ZURICH),
    (ST_JOSEPH_AND_ST_MARY, SZEGED), (ST_JOSEPH_AND_ST_MARY, ZAGREB),
    (SZEGED, ZAGREB),
    (VENICE, VIENNA),
    (VIENNA, ZAGREB),
];

pub static RAILS: &[(PlaceId, PlaceId)] = &[
    (ALICANTE, BARCELONA), (ALICANTE, MADRID),
    (BARCELONA, SARAGOSSA),
    (BARI, NAPLES),
    (BELGRADE, SOFIA), (BELGRADE, SZEGED),
    (BERLIN, HAMBURG), (BERLIN, LEIPZIG), (BERLIN, PRAGUE),
    (BORDEAUX, PARIS), (BORDEAUX, SARAGOSSA),
    (BRUSSELS, COLOGNE), (BRUSSELS, PARIS),
    (BUCHAREST, CONSTANTA), (BUCHAREST, GALATZ), (BUCHAREST, SZEGED),
    (BUDAPEST, SZEGED), (BUDAPEST, VIENNA),
    (COLOGNE, FRANKFURT),
    (EDINBURGH, MANCHESTER),
    (FLORENCE, MILAN), (FLORENCE, ROME),
    (FRANKFURT, LEIPZIG), (FRANKFURT, STRASBOURG),
    (GENEVA, MILAN),
    (GENOA, MILAN),
    (LE_HAVRE, PARIS),
    (LEIPZIG, NUREMBURG),
    (LISBON, MADRID),
    (LIVERPOOL, MANCHESTER),
    (LONDON, MANCHESTER), (LONDON, SWANSEA),
    (MADRID, SANTANDER), (MADRID, SARAGOSSA),
    (MARSEILLES, PARIS),
    (MILAN, ZURICH),
    (MUNICH, NUREMBURG),
    (NAPLES, ROME),
    (PRAGUE, VIENNA),
    (SALONICA, SOFIA),
    (SOFIA, VARNA),
    (STRASBOURG, ZURICH),
    (VENICE, VIENNA),
];

pub static BOATS: &[(PlaceId, PlaceId)] = &[
    (ADRIATIC_SEA, BARI), (ADRIATIC_SEA, IONIAN_SEA), (ADRIATIC_SEA, VENICE),
    (ATLANTIC_OCEAN, BAY_OF_BISCAY), (ATLANTIC_OCEAN, CADIZ), (ATLANTIC_OCEAN, ENGLISH_CHANNEL),
    (ATLANTIC_OCEAN, GALWAY), (ATLANTIC_OCEAN, IRISH_SEA), (ATLANTIC_OCEAN, LISBON),
    (ATLANTIC_OCEAN, MEDITERRANEAN_SEA), (ATLANTIC_OCEAN, NORTH_SEA),
    (BAY_OF_BISCAY, BORDEAUX), (BAY_OF_BISCAY, NANTES), (BAY_OF_BISCAY, SANTANDER),
    (BLACK_SEA, CONSTANTA), (BLACK_SEA, IONIAN_SEA), (BLACK_SEA, VARNA),
    (ENGLISH_CHANNEL, LE_HAVRE), (ENGLISH_CHANNEL, LONDON), (ENGLISH_CHANNEL, NORTH_SEA),
    (ENGLISH_CHANNEL, PLYMOUTH),
    (IONIAN_SEA, ATHENS), (IONIAN_SEA, SALONICA), (IONIAN_SEA, TYRRHENIAN_SEA), (IONIAN_SEA, VALONA),
    (IRISH_SEA, DUBLIN), (IRISH_SEA, LIVERPOOL), (IRISH_SEA, SWANSEA),
    (MEDITERRANEAN_SEA, ALICANTE), (MEDITERRANEAN_SEA, BARCELONA), (MEDITERRANEAN_SEA, CAGLIARI),
    (MEDITERRANEAN_SEA, MARSEILLES), (MEDITERRANEAN_SEA, TYRRHENIAN_SEA),
    (NORTH_SEA, AMSTERDAM), (NORTH_SEA, EDINBURGH), (NORTH_SEA, HAMBURG),
    (TYRRHENIAN_SEA, CAGLIARI), (TYRRHENIAN_SEA, GENOA), (TYRRHENIAN_SEA, NAPLES), (TYRRHENIAN_SEA, ROME),
];

// ── Lookups ────────────────────────────────────────────────────────────

pub fn place(id: PlaceId) -> &'static PlaceDef {
    &PLACES[id.0 as usize]
}

pub fn place_name(id: PlaceId) -> &'static str {
    place(id).name
}

pub fn place_code(id: PlaceId) -> &'static str {
    place(id).code
}

pub fn place_by_code(code: &str) -> Option<PlaceId> {
    PLACES.iter().find(|p| p.code == code).map(|p| p.id)
}

/// Whether `id` names a real board place.
pub fn is_valid(id: PlaceId) -> bool {
    (id.0 as usize) < NUM_PLACES
}

pub fn is_sea(id: PlaceId) -> bool {
    place(id).is_sea()
}

pub fn is_land(id: PlaceId) -> bool {
    place(id).is_land()
}

pub fn is_port(id: PlaceId) -> bool {
    place(id).is_port()
}

/// All port places in id order.
pub fn ports() -> impl Iterator<Item = PlaceId> {
    PLACES.iter().filter(|p| p.is_port()).map(|p| p.id)
}

pub fn connections(transport: Transport) -> &'static [(PlaceId, PlaceId)] {
    match transport {
        Transport::Road => ROADS,
        Transport::Rail => RAILS,
        Transport::Boat => BOATS,
    }
}

/// Places one step from `from` by the given transport, in table order.
pub fn neighbours(from: PlaceId, transport: Transport) -> impl Iterator<Item = PlaceId> {
    connections(transport).iter().filter_map(move |&(a, b)| {
        if a == from {
            Some(b)
        } else if b == from {
            Some(a)
        } else {
            None
        }
    })
}
