//! Fixed grape varietal catalog.
//!
//! Loaded by `cellar seed varietals`. Entries are upserted by name, so editing a definition
//! here and rerunning the loader updates the stored row in place.

use entity::sea_orm_active_enums::WineType;

use crate::server::model::varietal::NewVarietal;

/// A hand-authored varietal entry.
#[derive(Clone, Copy, Debug)]
pub struct VarietalDefinition {
    pub name: &'static str,
    pub wine_type: WineType,
    pub description: &'static str,
    pub common_regions: &'static [&'static str],
    pub characteristics: &'static [&'static str],
    pub aliases: &'static [&'static str],
}

impl From<&VarietalDefinition> for NewVarietal {
    fn from(definition: &VarietalDefinition) -> Self {
        Self {
            name: definition.name.to_string(),
            wine_type: definition.wine_type,
            description: definition.description.to_string(),
            common_regions: to_owned_list(definition.common_regions),
            characteristics: to_owned_list(definition.characteristics),
            aliases: to_owned_list(definition.aliases),
        }
    }
}

fn to_owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub const VARIETAL_CATALOG: [VarietalDefinition; 30] = [
    // Red
    VarietalDefinition {
        name: "Cabernet Sauvignon",
        wine_type: WineType::Red,
        description: "Full-bodied red with firm tannins and great aging potential, the backbone of Left Bank Bordeaux.",
        common_regions: &["Bordeaux", "Napa Valley", "Coonawarra", "Maipo Valley"],
        characteristics: &["Blackcurrant", "Cedar", "Tobacco", "Graphite", "Mint"],
        aliases: &[],
    },
    VarietalDefinition {
        name: "Merlot",
        wine_type: WineType::Red,
        description: "Soft, plush red with ripe fruit and supple tannins, dominant on the Right Bank of Bordeaux.",
        common_regions: &["Bordeaux", "Washington State", "Tuscany", "Napa Valley"],
        characteristics: &["Plum", "Black Cherry", "Chocolate", "Bay Leaf"],
        aliases: &[],
    },
    VarietalDefinition {
        name: "Pinot Noir",
        wine_type: WineType::Red,
        description: "Light to medium-bodied red prized for its perfume and transparency of site.",
        common_regions: &["Burgundy", "Willamette Valley", "Central Otago", "Sonoma Coast"],
        characteristics: &["Red Cherry", "Raspberry", "Forest Floor", "Mushroom", "Clove"],
        aliases: &["Spätburgunder", "Pinot Nero"],
    },
    VarietalDefinition {
        name: "Syrah",
        wine_type: WineType::Red,
        description: "Dark, peppery red that ranges from savory Northern Rhône styles to ripe Australian Shiraz.",
        common_regions: &["Northern Rhône", "Barossa Valley", "McLaren Vale", "Walla Walla"],
        characteristics: &["Blackberry", "Black Pepper", "Smoked Meat", "Olive", "Violet"],
        aliases: &["Shiraz"],
    },
    VarietalDefinition {
        name: "Zinfandel",
        wine_type: WineType::Red,
        description: "Jammy, high-alcohol red with bramble fruit, a California heritage grape.",
        common_regions: &["Sonoma County", "Lodi", "Paso Robles", "Puglia"],
        characteristics: &["Blackberry Jam", "Raisin", "Black Pepper", "Licorice"],
        aliases: &["Primitivo"],
    },
    VarietalDefinition {
        name: "Malbec",
        wine_type: WineType::Red,
        description: "Inky, velvety red that found its home at altitude in Mendoza.",
        common_regions: &["Mendoza", "Cahors", "Salta"],
        characteristics: &["Plum", "Blackberry", "Violet", "Cocoa", "Leather"],
        aliases: &["Côt", "Auxerrois"],
    },
    VarietalDefinition {
        name: "Sangiovese",
        wine_type: WineType::Red,
        description: "High-acid Italian red with savory cherry fruit, the grape of Chianti and Brunello.",
        common_regions: &["Chianti", "Montalcino", "Montepulciano", "Romagna"],
        characteristics: &["Sour Cherry", "Tomato Leaf", "Dried Herbs", "Leather", "Balsamic"],
        aliases: &["Brunello", "Prugnolo Gentile", "Morellino"],
    },
    VarietalDefinition {
        name: "Tempranillo",
        wine_type: WineType::Red,
        description: "Spain's signature red, often oak-aged with notes of leather and dried fruit.",
        common_regions: &["Rioja", "Ribera del Duero", "Toro", "Douro"],
        characteristics: &["Cherry", "Leather", "Tobacco", "Dill", "Vanilla"],
        aliases: &["Tinto Fino", "Tinta Roriz", "Aragonez"],
    },
    VarietalDefinition {
        name: "Nebbiolo",
        wine_type: WineType::Red,
        description: "Pale but powerful Piedmontese red with soaring tannins and acidity.",
        common_regions: &["Barolo", "Barbaresco", "Valtellina", "Roero"],
        characteristics: &["Rose", "Tar", "Red Cherry", "Anise", "Truffle"],
        aliases: &["Spanna", "Chiavennasca"],
    },
    VarietalDefinition {
        name: "Grenache",
        wine_type: WineType::Red,
        description: "Warm-climate red with generous red fruit, central to Southern Rhône blends.",
        common_regions: &["Châteauneuf-du-Pape", "Priorat", "Barossa Valley", "Sardinia"],
        characteristics: &["Strawberry", "Raspberry", "White Pepper", "Garrigue"],
        aliases: &["Garnacha", "Cannonau"],
    },
    VarietalDefinition {
        name: "Cabernet Franc",
        wine_type: WineType::Red,
        description: "Aromatic, medium-bodied red with a signature herbal lift.",
        common_regions: &["Loire Valley", "Saint-Émilion", "Finger Lakes"],
        characteristics: &["Raspberry", "Bell Pepper", "Graphite", "Violet"],
        aliases: &["Bouchet"],
    },
    VarietalDefinition {
        name: "Petite Sirah",
        wine_type: WineType::Red,
        description: "Deeply colored, tannic red that adds structure to California blends.",
        common_regions: &["Napa Valley", "Lodi", "Paso Robles"],
        characteristics: &["Blueberry", "Black Plum", "Dark Chocolate", "Black Pepper"],
        aliases: &["Durif"],
    },
    VarietalDefinition {
        name: "Carménère",
        wine_type: WineType::Red,
        description: "Once-lost Bordeaux variety rediscovered in Chile, with soft tannins and green spice.",
        common_regions: &["Colchagua Valley", "Maipo Valley", "Rapel Valley"],
        characteristics: &["Red Plum", "Green Peppercorn", "Paprika", "Cocoa"],
        aliases: &["Grande Vidure"],
    },
    VarietalDefinition {
        name: "Mourvèdre",
        wine_type: WineType::Red,
        description: "Brooding, gamey red that thrives in hot Mediterranean climates.",
        common_regions: &["Bandol", "Jumilla", "Southern Rhône"],
        characteristics: &["Blackberry", "Game", "Black Pepper", "Cocoa"],
        aliases: &["Monastrell", "Mataro"],
    },
    VarietalDefinition {
        name: "Barbera",
        wine_type: WineType::Red,
        description: "Juicy, low-tannin red with bright acidity, Piedmont's everyday wine.",
        common_regions: &["Asti", "Alba", "Monferrato"],
        characteristics: &["Sour Cherry", "Red Plum", "Licorice", "Dried Herbs"],
        aliases: &[],
    },
    // White
    VarietalDefinition {
        name: "Chardonnay",
        wine_type: WineType::White,
        description: "Versatile white that mirrors winemaking, from lean Chablis to rich oaked styles.",
        common_regions: &["Burgundy", "Sonoma County", "Margaret River", "Champagne"],
        characteristics: &["Apple", "Lemon", "Butter", "Vanilla", "Hazelnut"],
        aliases: &["Morillon"],
    },
    VarietalDefinition {
        name: "Sauvignon Blanc",
        wine_type: WineType::White,
        description: "Zesty, aromatic white with pronounced citrus and herbaceous notes.",
        common_regions: &["Marlborough", "Sancerre", "Pouilly-Fumé", "Napa Valley"],
        characteristics: &["Grapefruit", "Passion Fruit", "Cut Grass", "Gooseberry"],
        aliases: &["Fumé Blanc"],
    },
    VarietalDefinition {
        name: "Riesling",
        wine_type: WineType::White,
        description: "Highly aromatic white with piercing acidity, made from bone dry to lusciously sweet.",
        common_regions: &["Mosel", "Rheingau", "Alsace", "Clare Valley"],
        characteristics: &["Lime", "Green Apple", "Petrol", "Honeysuckle", "Slate"],
        aliases: &["Johannisberg Riesling"],
    },
    VarietalDefinition {
        name: "Pinot Grigio",
        wine_type: WineType::White,
        description: "Light, crisp white in Italy and a richer, spicier white as Alsatian Pinot Gris.",
        common_regions: &["Friuli", "Alto Adige", "Alsace", "Oregon"],
        characteristics: &["Pear", "Lemon", "Almond", "Honey"],
        aliases: &["Pinot Gris", "Grauburgunder"],
    },
    VarietalDefinition {
        name: "Gewürztraminer",
        wine_type: WineType::White,
        description: "Exotically perfumed white with low acidity and an oily texture.",
        common_regions: &["Alsace", "Alto Adige", "Pfalz"],
        characteristics: &["Lychee", "Rose", "Ginger", "Grapefruit"],
        aliases: &["Traminer"],
    },
    VarietalDefinition {
        name: "Chenin Blanc",
        wine_type: WineType::White,
        description: "High-acid white from the Loire and South Africa, equally at home dry, sweet or sparkling.",
        common_regions: &["Vouvray", "Savennières", "Stellenbosch", "Swartland"],
        characteristics: &["Quince", "Yellow Apple", "Honey", "Chamomile", "Lanolin"],
        aliases: &["Steen", "Pineau de la Loire"],
    },
    VarietalDefinition {
        name: "Viognier",
        wine_type: WineType::White,
        description: "Full-bodied, floral white with stone fruit and a soft finish.",
        common_regions: &["Condrieu", "Languedoc", "Eden Valley"],
        characteristics: &["Apricot", "Peach", "Honeysuckle", "Orange Blossom"],
        aliases: &[],
    },
    VarietalDefinition {
        name: "Albariño",
        wine_type: WineType::White,
        description: "Saline, refreshing white from the Atlantic coast of Galicia.",
        common_regions: &["Rías Baixas", "Vinho Verde"],
        characteristics: &["Lemon", "Nectarine", "Saline", "Grapefruit"],
        aliases: &["Alvarinho"],
    },
    VarietalDefinition {
        name: "Grüner Veltliner",
        wine_type: WineType::White,
        description: "Austria's flagship white with a peppery bite and vivid acidity.",
        common_regions: &["Wachau", "Kamptal", "Kremstal", "Weinviertel"],
        characteristics: &["White Pepper", "Lime", "Green Bean", "Radish"],
        aliases: &["Grüner"],
    },
    VarietalDefinition {
        name: "Sémillon",
        wine_type: WineType::White,
        description: "Waxy, long-lived white, partner to Sauvignon Blanc in Bordeaux and a Hunter Valley specialty.",
        common_regions: &["Bordeaux", "Hunter Valley", "Sauternes"],
        characteristics: &["Lemon", "Lanolin", "Beeswax", "Toast"],
        aliases: &[],
    },
    // Dessert
    VarietalDefinition {
        name: "Muscat",
        wine_type: WineType::Dessert,
        description: "Intensely grapey family of varieties used for sweet and fortified wines worldwide.",
        common_regions: &["Asti", "Rutherglen", "Beaumes-de-Venise", "Samos"],
        characteristics: &["Orange Blossom", "Grape", "Peach", "Rose"],
        aliases: &["Moscato", "Muscat Blanc à Petits Grains", "Moscatel"],
    },
    VarietalDefinition {
        name: "Furmint",
        wine_type: WineType::Dessert,
        description: "Hungarian grape behind botrytized Tokaji Aszú, with searing acidity.",
        common_regions: &["Tokaj", "Somló"],
        characteristics: &["Apricot", "Marmalade", "Honey", "Ginger"],
        aliases: &["Šipon"],
    },
    VarietalDefinition {
        name: "Vidal Blanc",
        wine_type: WineType::Dessert,
        description: "Winter-hardy hybrid used for Canadian and American ice wine.",
        common_regions: &["Niagara Peninsula", "Finger Lakes", "Ontario"],
        characteristics: &["Pineapple", "Apricot", "Honey", "Mango"],
        aliases: &["Vidal"],
    },
    // Sparkling
    VarietalDefinition {
        name: "Glera",
        wine_type: WineType::Sparkling,
        description: "Aromatic white grape of Prosecco, made into light, fruity sparkling wine.",
        common_regions: &["Valdobbiadene", "Conegliano", "Veneto"],
        characteristics: &["Green Apple", "Pear", "Honeydew", "White Flowers"],
        aliases: &["Prosecco"],
    },
    // Fortified
    VarietalDefinition {
        name: "Touriga Nacional",
        wine_type: WineType::Fortified,
        description: "Portugal's noblest red grape and the backbone of vintage Port.",
        common_regions: &["Douro", "Dão"],
        characteristics: &["Blackberry", "Violet", "Bergamot", "Dark Chocolate"],
        aliases: &[],
    },
];
