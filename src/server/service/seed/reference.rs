//! Fixed reference data written verbatim by the collection seeder.

use crate::server::model::reference::{CellarLocationDefinition, WineryDefinition};

const fn winery(
    name: &'static str,
    region: &'static str,
    country: &'static str,
    founded: i32,
) -> WineryDefinition {
    WineryDefinition {
        name,
        region,
        country,
        founded,
    }
}

pub const WINERIES: [WineryDefinition; 100] = [
    // France
    winery("Château Latour", "Bordeaux - Pauillac", "France", 1331),
    winery(
        "Château Lafite Rothschild",
        "Bordeaux - Pauillac",
        "France",
        1234,
    ),
    winery(
        "Château Mouton Rothschild",
        "Bordeaux - Pauillac",
        "France",
        1853,
    ),
    winery("Château Margaux", "Bordeaux - Margaux", "France", 1590),
    winery("Château Palmer", "Bordeaux - Margaux", "France", 1814),
    winery(
        "Château Haut-Brion",
        "Bordeaux - Pessac-Léognan",
        "France",
        1525,
    ),
    winery(
        "Château Cheval Blanc",
        "Bordeaux - Saint-Émilion",
        "France",
        1832,
    ),
    winery("Château Pétrus", "Bordeaux - Pomerol", "France", 1770),
    winery("Château d'Yquem", "Bordeaux - Sauternes", "France", 1593),
    winery(
        "Château Léoville Las Cases",
        "Bordeaux - Saint-Julien",
        "France",
        1638,
    ),
    winery("Domaine de la Romanée-Conti", "Burgundy", "France", 1869),
    winery("Domaine Leflaive", "Burgundy", "France", 1717),
    winery("Domaine Armand Rousseau", "Burgundy", "France", 1909),
    winery("Joseph Drouhin", "Burgundy", "France", 1880),
    winery("Louis Jadot", "Burgundy", "France", 1859),
    winery("Domaine William Fèvre", "Chablis", "France", 1959),
    winery("Moët & Chandon", "Champagne", "France", 1743),
    winery("Veuve Clicquot", "Champagne", "France", 1772),
    winery("Krug", "Champagne", "France", 1843),
    winery("Bollinger", "Champagne", "France", 1829),
    winery("E. Guigal", "Rhône Valley", "France", 1946),
    winery("M. Chapoutier", "Rhône Valley", "France", 1808),
    winery("Château de Beaucastel", "Rhône Valley", "France", 1549),
    winery("Domaine Huet", "Loire Valley", "France", 1928),
    winery("Domaine Zind-Humbrecht", "Alsace", "France", 1959),
    // Italy
    winery("Antinori", "Tuscany", "Italy", 1385),
    winery("Tenuta San Guido", "Tuscany - Bolgheri", "Italy", 1944),
    winery("Ornellaia", "Tuscany - Bolgheri", "Italy", 1981),
    winery("Biondi-Santi", "Tuscany - Montalcino", "Italy", 1888),
    winery(
        "Castello di Ama",
        "Tuscany - Chianti Classico",
        "Italy",
        1972,
    ),
    winery("Fontodi", "Tuscany - Chianti Classico", "Italy", 1968),
    winery("Gaja", "Piedmont - Barbaresco", "Italy", 1859),
    winery("Giacomo Conterno", "Piedmont - Barolo", "Italy", 1908),
    winery("Bruno Giacosa", "Piedmont - Barolo", "Italy", 1900),
    winery("Vietti", "Piedmont - Barolo", "Italy", 1919),
    winery("Braida", "Piedmont - Asti", "Italy", 1961),
    winery("Allegrini", "Veneto - Valpolicella", "Italy", 1854),
    winery("Nino Franco", "Veneto - Valdobbiadene", "Italy", 1919),
    winery("Jermann", "Friuli", "Italy", 1881),
    winery("Planeta", "Sicily", "Italy", 1995),
    // Spain
    winery("Vega Sicilia", "Ribera del Duero", "Spain", 1864),
    winery("Bodegas Pesquera", "Ribera del Duero", "Spain", 1972),
    winery("La Rioja Alta", "Rioja", "Spain", 1890),
    winery("López de Heredia", "Rioja", "Spain", 1877),
    winery("Marqués de Murrieta", "Rioja", "Spain", 1852),
    winery("Álvaro Palacios", "Priorat", "Spain", 1989),
    winery("Pazo de Señorans", "Rías Baixas", "Spain", 1989),
    winery("Codorníu", "Penedès", "Spain", 1551),
    // USA
    winery("Opus One", "Napa Valley", "USA", 1979),
    winery("Screaming Eagle", "Napa Valley", "USA", 1986),
    winery("Stag's Leap Wine Cellars", "Napa Valley", "USA", 1970),
    winery("Caymus Vineyards", "Napa Valley", "USA", 1972),
    winery("Robert Mondavi Winery", "Napa Valley", "USA", 1966),
    winery("Heitz Cellar", "Napa Valley", "USA", 1961),
    winery("Schramsberg", "Napa Valley", "USA", 1862),
    winery("Ridge Vineyards", "Santa Cruz Mountains", "USA", 1962),
    winery("Kistler Vineyards", "Sonoma County", "USA", 1978),
    winery("Williams Selyem", "Sonoma County", "USA", 1981),
    winery("Seghesio Family Vineyards", "Sonoma County", "USA", 1895),
    winery("Turley Wine Cellars", "Paso Robles", "USA", 1993),
    winery("Tablas Creek", "Paso Robles", "USA", 1989),
    winery("Au Bon Climat", "Santa Barbara County", "USA", 1982),
    winery("Domaine Drouhin Oregon", "Willamette Valley", "USA", 1987),
    winery("Domaine Serene", "Willamette Valley", "USA", 1989),
    winery("Chateau Ste. Michelle", "Washington State", "USA", 1934),
    winery("Dr. Konstantin Frank", "Finger Lakes", "USA", 1962),
    // Australia
    winery("Penfolds", "Barossa Valley", "Australia", 1844),
    winery("Henschke", "Eden Valley", "Australia", 1868),
    winery("Torbreck", "Barossa Valley", "Australia", 1994),
    winery("d'Arenberg", "McLaren Vale", "Australia", 1912),
    winery("Leeuwin Estate", "Margaret River", "Australia", 1974),
    winery("Grosset", "Clare Valley", "Australia", 1981),
    winery("Tyrrell's", "Hunter Valley", "Australia", 1858),
    // New Zealand
    winery("Cloudy Bay", "Marlborough", "New Zealand", 1985),
    winery("Dog Point", "Marlborough", "New Zealand", 2002),
    winery("Felton Road", "Central Otago", "New Zealand", 1991),
    winery("Ata Rangi", "Martinborough", "New Zealand", 1980),
    // Argentina
    winery("Catena Zapata", "Mendoza", "Argentina", 1902),
    winery("Achával-Ferrer", "Mendoza", "Argentina", 1998),
    winery("Bodega Colomé", "Salta", "Argentina", 1831),
    winery("Zuccardi", "Mendoza", "Argentina", 1963),
    // Chile
    winery("Concha y Toro", "Maipo Valley", "Chile", 1883),
    winery("Almaviva", "Maipo Valley", "Chile", 1997),
    winery("Montes", "Colchagua Valley", "Chile", 1988),
    winery("Errázuriz", "Aconcagua Valley", "Chile", 1870),
    // Germany
    winery("Egon Müller", "Mosel", "Germany", 1797),
    winery("Dr. Loosen", "Mosel", "Germany", 1805),
    winery("J.J. Prüm", "Mosel", "Germany", 1911),
    winery("Robert Weil", "Rheingau", "Germany", 1875),
    winery("Dönnhoff", "Nahe", "Germany", 1750),
    // Portugal
    winery("Taylor's", "Douro", "Portugal", 1692),
    winery("Graham's", "Douro", "Portugal", 1820),
    winery("Quinta do Noval", "Douro", "Portugal", 1715),
    winery("Niepoort", "Douro", "Portugal", 1842),
    // South Africa
    winery("Kanonkop", "Stellenbosch", "South Africa", 1910),
    winery("Klein Constantia", "Constantia", "South Africa", 1685),
    winery("Mullineux", "Swartland", "South Africa", 2007),
    // Austria
    winery("Domäne Wachau", "Wachau", "Austria", 1938),
    winery("Weingut Bründlmayer", "Kamptal", "Austria", 1581),
    // Hungary
    winery("Royal Tokaji", "Tokaj", "Hungary", 1990),
];

pub const TAG_NAMES: [&str; 10] = [
    "Special Occasion",
    "Gift",
    "Cellar Favorite",
    "Drink Soon",
    "Investment",
    "Collectible",
    "Weeknight",
    "Dinner Party",
    "Aging Potential",
    "Organic",
];

/// Colors assigned to tags in order, wrapping around once exhausted.
pub const TAG_COLORS: [&str; 8] = [
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#06b6d4", "#3b82f6", "#8b5cf6", "#ec4899",
];

pub const CELLAR_LOCATIONS: [CellarLocationDefinition; 5] = [
    CellarLocationDefinition {
        name: "Main Cellar",
        temperature: "55°F",
        humidity: "70%",
        capacity: 500,
    },
    CellarLocationDefinition {
        name: "Wine Fridge",
        temperature: "52°F",
        humidity: "65%",
        capacity: 48,
    },
    CellarLocationDefinition {
        name: "Basement Rack",
        temperature: "58°F",
        humidity: "60%",
        capacity: 200,
    },
    CellarLocationDefinition {
        name: "Kitchen Cooler",
        temperature: "45°F",
        humidity: "50%",
        capacity: 24,
    },
    CellarLocationDefinition {
        name: "Off-site Storage",
        temperature: "55°F",
        humidity: "70%",
        capacity: 1000,
    },
];

pub const PURCHASE_LOCATIONS: [&str; 6] = [
    "Winery Visit",
    "Wine Shop",
    "Online",
    "Auction",
    "Restaurant",
    "Gift",
];

pub const RETAILERS: [&str; 8] = [
    "Total Wine",
    "K&L Wine Merchants",
    "Wine.com",
    "Zachys",
    "Sotheby's Wine",
    "Berry Bros. & Rudd",
    "Local Wine Shop",
    "Winery Direct",
];

/// Tuples of varietal name and the style qualifiers a wine of that varietal may be
/// labelled with.
pub const STYLE_QUALIFIERS: [(&str, &[&str]); 10] = [
    ("Cabernet Sauvignon", &["Reserve", "Estate", "Private Selection"]),
    ("Pinot Noir", &["Reserve", "Grand Cru", "Premier Cru", "Village"]),
    ("Chardonnay", &["Reserve", "Grand Cru", "Premier Cru", "Unoaked"]),
    ("Merlot", &["Reserve", "Estate"]),
    ("Syrah", &["Reserve", "Old Vine"]),
    ("Zinfandel", &["Old Vine", "Reserve"]),
    ("Tempranillo", &["Crianza", "Reserva", "Gran Reserva"]),
    ("Sangiovese", &["Riserva", "Gran Selezione"]),
    ("Nebbiolo", &["Riserva"]),
    ("Riesling", &["Kabinett", "Spätlese", "Auslese", "Trocken"]),
];

/// Returns the style qualifiers for a varietal name, empty when it has none.
pub fn style_qualifiers(varietal_name: &str) -> &'static [&'static str] {
    STYLE_QUALIFIERS
        .iter()
        .find(|(name, _)| *name == varietal_name)
        .map(|(_, qualifiers)| *qualifiers)
        .unwrap_or(&[])
}

/// Pairs each tag name with its color, cycling through the palette.
pub fn tags_with_colors() -> Vec<(String, Option<String>)> {
    TAG_NAMES
        .iter()
        .zip(TAG_COLORS.iter().cycle())
        .map(|(name, color)| (name.to_string(), Some(color.to_string())))
        .collect()
}
