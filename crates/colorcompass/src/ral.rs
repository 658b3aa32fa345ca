//! The RAL classic catalog: a fixed list of industrial reference colors.
//!
//! The catalog is baked in as a static table and never mutated. Lookup is
//! a linear case-insensitive substring scan; at ~200 entries there is no
//! point in an index.

use serde::Serialize;

/// One catalog entry: a `RAL`-prefixed designation, a human-readable
/// name, and the matching hex value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RalColor {
    pub number: &'static str,
    pub name: &'static str,
    pub hex: &'static str,
}

/// Filter the catalog by a case-insensitive substring match against the
/// designation or the name, preserving catalog order. An empty query
/// returns every entry.
pub fn search_ral(query: &str) -> Vec<&'static RalColor> {
    let needle = query.to_lowercase();
    RAL_COLORS
        .iter()
        .filter(|color| {
            color.name.to_lowercase().contains(&needle)
                || color.number.to_lowercase().contains(&needle)
        })
        .collect()
}

macro_rules! ral {
    ($number:literal, $name:literal, $hex:literal) => {
        RalColor {
            number: $number,
            name: $name,
            hex: $hex,
        }
    };
}

/// The RAL classic colors, in catalog order.
pub static RAL_COLORS: &[RalColor] = &[
    ral!("RAL 1000", "Green beige", "#BEBD7F"),
    ral!("RAL 1001", "Beige", "#C2B078"),
    ral!("RAL 1002", "Sand yellow", "#C6A664"),
    ral!("RAL 1003", "Signal yellow", "#E5BE01"),
    ral!("RAL 1004", "Golden yellow", "#CDA434"),
    ral!("RAL 1005", "Honey yellow", "#A98307"),
    ral!("RAL 1006", "Maize yellow", "#E4A010"),
    ral!("RAL 1007", "Daffodil yellow", "#DC9D00"),
    ral!("RAL 1011", "Brown beige", "#8A6642"),
    ral!("RAL 1012", "Lemon yellow", "#C7B446"),
    ral!("RAL 1013", "Oyster white", "#EAE6CA"),
    ral!("RAL 1014", "Ivory", "#E1CC4F"),
    ral!("RAL 1015", "Light ivory", "#E6D690"),
    ral!("RAL 1016", "Sulfur yellow", "#EDFF21"),
    ral!("RAL 1017", "Saffron yellow", "#F5D033"),
    ral!("RAL 1018", "Zinc yellow", "#F8F32B"),
    ral!("RAL 1019", "Grey beige", "#9E9764"),
    ral!("RAL 1020", "Olive yellow", "#999950"),
    ral!("RAL 1021", "Rape yellow", "#F3DA0B"),
    ral!("RAL 1023", "Traffic yellow", "#FAD201"),
    ral!("RAL 1024", "Ochre yellow", "#AEA04B"),
    ral!("RAL 1027", "Curry", "#9D9101"),
    ral!("RAL 1028", "Melon yellow", "#F4A900"),
    ral!("RAL 1032", "Broom yellow", "#D6AE01"),
    ral!("RAL 1033", "Dahlia yellow", "#F3A505"),
    ral!("RAL 1034", "Pastel yellow", "#EFA94A"),
    ral!("RAL 1035", "Pearl beige", "#6A5D4D"),
    ral!("RAL 1036", "Pearl gold", "#705335"),
    ral!("RAL 1037", "Sun yellow", "#F39800"),
    ral!("RAL 2000", "Yellow orange", "#ED760E"),
    ral!("RAL 2001", "Red orange", "#C93C20"),
    ral!("RAL 2002", "Vermilion", "#CB2821"),
    ral!("RAL 2003", "Pastel orange", "#FF7514"),
    ral!("RAL 2004", "Pure orange", "#F44611"),
    ral!("RAL 2005", "Luminous orange", "#FF2301"),
    ral!("RAL 2007", "Luminous bright orange", "#FFA420"),
    ral!("RAL 2008", "Bright red orange", "#F75E25"),
    ral!("RAL 2009", "Traffic orange", "#F54021"),
    ral!("RAL 2010", "Signal orange", "#D84B20"),
    ral!("RAL 2011", "Deep orange", "#EC7C26"),
    ral!("RAL 2012", "Salmon range", "#E55137"),
    ral!("RAL 3000", "Flame red", "#AF2B1E"),
    ral!("RAL 3001", "Signal red", "#A52019"),
    ral!("RAL 3002", "Carmine red", "#A2231D"),
    ral!("RAL 3003", "Ruby red", "#9B111E"),
    ral!("RAL 3004", "Purple red", "#75151E"),
    ral!("RAL 3005", "Wine red", "#5E2129"),
    ral!("RAL 3007", "Black red", "#412227"),
    ral!("RAL 3009", "Oxide red", "#642424"),
    ral!("RAL 3011", "Brown red", "#781F19"),
    ral!("RAL 3012", "Beige red", "#C1876B"),
    ral!("RAL 3013", "Tomato red", "#A12312"),
    ral!("RAL 3014", "Antique pink", "#D36E70"),
    ral!("RAL 3015", "Light pink", "#EA899A"),
    ral!("RAL 3016", "Coral red", "#B32821"),
    ral!("RAL 3017", "Rose", "#E63244"),
    ral!("RAL 3018", "Strawberry red", "#D53032"),
    ral!("RAL 3020", "Traffic red", "#CC0605"),
    ral!("RAL 3022", "Salmon pink", "#D95030"),
    ral!("RAL 3024", "Luminous red", "#F80000"),
    ral!("RAL 3026", "Luminous bright red", "#FE0000"),
    ral!("RAL 3027", "Raspberry red", "#C51D34"),
    ral!("RAL 3028", "Pure red", "#CC0605"),
    ral!("RAL 3031", "Orient red", "#B32428"),
    ral!("RAL 3032", "Pearl ruby red", "#721422"),
    ral!("RAL 3033", "Pearl pink", "#B44C43"),
    ral!("RAL 4001", "Red lilac", "#6D3F5B"),
    ral!("RAL 4002", "Red violet", "#922B3E"),
    ral!("RAL 4003", "Heather violet", "#DE4C8A"),
    ral!("RAL 4004", "Claret violet", "#641C34"),
    ral!("RAL 4005", "Blue lilac", "#6C4675"),
    ral!("RAL 4006", "Traffic purple", "#A03472"),
    ral!("RAL 4007", "Purple violet", "#4A192C"),
    ral!("RAL 4008", "Signal violet", "#924874"),
    ral!("RAL 4009", "Pastel violet", "#A18594"),
    ral!("RAL 4010", "Telemagenta", "#CF3476"),
    ral!("RAL 4011", "Pearl violet", "#8673A1"),
    ral!("RAL 5000", "Violet blue", "#354D73"),
    ral!("RAL 5001", "Green blue", "#1F3A93"),
    ral!("RAL 5002", "Ultramarine blue", "#20214F"),
    ral!("RAL 5003", "Sapphire blue", "#1D1E33"),
    ral!("RAL 5004", "Black blue", "#18171C"),
    ral!("RAL 5005", "Signal blue", "#1E2460"),
    ral!("RAL 5007", "Brillant blue", "#3E5F8A"),
    ral!("RAL 5008", "Grey blue", "#26252D"),
    ral!("RAL 5009", "Azure blue", "#025669"),
    ral!("RAL 5010", "Gentian blue", "#0E294B"),
    ral!("RAL 5011", "Steel blue", "#231A24"),
    ral!("RAL 5012", "Light blue", "#3B83BD"),
    ral!("RAL 5013", "Cobalt blue", "#1E213D"),
    ral!("RAL 5014", "Pigeon blue", "#606E8C"),
    ral!("RAL 5015", "Sky blue", "#2271B3"),
    ral!("RAL 5017", "Traffic blue", "#063971"),
    ral!("RAL 5018", "Turquoise blue", "#3F888F"),
    ral!("RAL 5019", "Capri blue", "#1B5583"),
    ral!("RAL 5020", "Ocean blue", "#1D334A"),
    ral!("RAL 5021", "Water blue", "#256D7B"),
    ral!("RAL 5022", "Night blue", "#252850"),
    ral!("RAL 5023", "Distant blue", "#49678D"),
    ral!("RAL 5024", "Pastel blue", "#5D9B9B"),
    ral!("RAL 6000", "Patina green", "#316650"),
    ral!("RAL 6001", "Emerald green", "#287233"),
    ral!("RAL 6002", "Leaf green", "#2D5016"),
    ral!("RAL 6003", "Olive green", "#424632"),
    ral!("RAL 6004", "Blue green", "#1F3A93"),
    ral!("RAL 6005", "Moss green", "#2F4538"),
    ral!("RAL 6006", "Grey olive", "#3E3B32"),
    ral!("RAL 6007", "Bottle green", "#343B29"),
    ral!("RAL 6008", "Brown green", "#39352A"),
    ral!("RAL 6009", "Fir green", "#31372B"),
    ral!("RAL 6010", "Grass green", "#35682D"),
    ral!("RAL 6011", "Reseda green", "#587246"),
    ral!("RAL 6012", "Black green", "#343E40"),
    ral!("RAL 6013", "Reed green", "#6C7156"),
    ral!("RAL 6014", "Yellow olive", "#47402E"),
    ral!("RAL 6015", "Black olive", "#3B3C36"),
    ral!("RAL 6016", "Turquoise green", "#1E5945"),
    ral!("RAL 6017", "Yellow green", "#4C9141"),
    ral!("RAL 6018", "May green", "#57A639"),
    ral!("RAL 6019", "Pastel green", "#BDECB6"),
    ral!("RAL 6020", "Chrome green", "#2E3A23"),
    ral!("RAL 6021", "Pale green", "#89AC76"),
    ral!("RAL 6022", "Olive drab", "#25221B"),
    ral!("RAL 6024", "Traffic green", "#308446"),
    ral!("RAL 6025", "Fern green", "#3D642D"),
    ral!("RAL 6026", "Opal green", "#015D52"),
    ral!("RAL 6027", "Light green", "#84C3CE"),
    ral!("RAL 6028", "Pine green", "#2C5545"),
    ral!("RAL 6029", "Mint green", "#20603D"),
    ral!("RAL 6032", "Signal green", "#317F43"),
    ral!("RAL 6033", "Mint turquoise", "#497E76"),
    ral!("RAL 6034", "Pastel turquoise", "#7FB5B5"),
    ral!("RAL 6035", "Pearl green", "#1C542D"),
    ral!("RAL 6036", "Pearl opal green", "#193737"),
    ral!("RAL 6037", "Pure green", "#008F39"),
    ral!("RAL 6038", "Luminous green", "#00BB2D"),
    ral!("RAL 7000", "Squirrel grey", "#78858B"),
    ral!("RAL 7001", "Silver grey", "#8A9597"),
    ral!("RAL 7002", "Olive grey", "#7E7B52"),
    ral!("RAL 7003", "Moss grey", "#6C7059"),
    ral!("RAL 7004", "Signal grey", "#969992"),
    ral!("RAL 7005", "Mouse grey", "#646B63"),
    ral!("RAL 7006", "Beige grey", "#6D6552"),
    ral!("RAL 7008", "Khaki grey", "#6A5F31"),
    ral!("RAL 7009", "Green grey", "#4D5645"),
    ral!("RAL 7010", "Tarpaulin grey", "#4C514A"),
    ral!("RAL 7011", "Iron grey", "#434B4D"),
    ral!("RAL 7012", "Basalt grey", "#4E5754"),
    ral!("RAL 7013", "Brown grey", "#464531"),
    ral!("RAL 7015", "Slate grey", "#434750"),
    ral!("RAL 7016", "Anthracite grey", "#293133"),
    ral!("RAL 7021", "Black grey", "#23282B"),
    ral!("RAL 7022", "Umbra grey", "#332F2C"),
    ral!("RAL 7023", "Concrete grey", "#686C5E"),
    ral!("RAL 7024", "Graphite grey", "#474A51"),
    ral!("RAL 7026", "Granite grey", "#2F353B"),
    ral!("RAL 7030", "Stone grey", "#8B8C7A"),
    ral!("RAL 7031", "Blue grey", "#474B4E"),
    ral!("RAL 7032", "Pebble grey", "#B8B799"),
    ral!("RAL 7033", "Cement grey", "#7D8471"),
    ral!("RAL 7034", "Yellow grey", "#8F8B66"),
    ral!("RAL 7035", "Light grey", "#D7D7D7"),
    ral!("RAL 7036", "Platinum grey", "#7F7679"),
    ral!("RAL 7037", "Dusty grey", "#7D7F7D"),
    ral!("RAL 7038", "Agate grey", "#B5B8B1"),
    ral!("RAL 7039", "Quartz grey", "#6C6960"),
    ral!("RAL 7040", "Window grey", "#9DA1AA"),
    ral!("RAL 7042", "Traffic grey A", "#8D948D"),
    ral!("RAL 7043", "Traffic grey B", "#4E5452"),
    ral!("RAL 7044", "Silk grey", "#CAC4B0"),
    ral!("RAL 7045", "Telegrey 1", "#909090"),
    ral!("RAL 7046", "Telegrey 2", "#82898F"),
    ral!("RAL 7047", "Telegrey 4", "#D0D0D0"),
    ral!("RAL 7048", "Pearl mouse grey", "#898176"),
    ral!("RAL 8000", "Green brown", "#826C34"),
    ral!("RAL 8001", "Ochre brown", "#955F20"),
    ral!("RAL 8002", "Signal brown", "#6C3B2A"),
    ral!("RAL 8003", "Clay brown", "#734222"),
    ral!("RAL 8004", "Copper brown", "#8E402A"),
    ral!("RAL 8007", "Fawn brown", "#59351F"),
    ral!("RAL 8008", "Olive brown", "#6F4F28"),
    ral!("RAL 8011", "Nut brown", "#5B3A29"),
    ral!("RAL 8012", "Red brown", "#592321"),
    ral!("RAL 8014", "Sepia brown", "#382C1E"),
    ral!("RAL 8015", "Chestnut brown", "#633A34"),
    ral!("RAL 8016", "Mahogany brown", "#4C2F27"),
    ral!("RAL 8017", "Chocolate brown", "#45322E"),
    ral!("RAL 8019", "Grey brown", "#403A3A"),
    ral!("RAL 8022", "Black brown", "#212121"),
    ral!("RAL 8023", "Orange brown", "#A65E2E"),
    ral!("RAL 8024", "Beige brown", "#79553D"),
    ral!("RAL 8025", "Pale brown", "#755C48"),
    ral!("RAL 8028", "Terra brown", "#4E3B31"),
    ral!("RAL 8029", "Pearl copper", "#763C28"),
    ral!("RAL 9001", "Cream", "#FDF4E3"),
    ral!("RAL 9002", "Grey white", "#E7EBDA"),
    ral!("RAL 9003", "Signal white", "#F4F4F4"),
    ral!("RAL 9004", "Signal black", "#282828"),
    ral!("RAL 9005", "Jet black", "#0A0A0A"),
    ral!("RAL 9006", "White aluminium", "#A5A5A5"),
    ral!("RAL 9007", "Grey aluminium", "#8F8F8F"),
    ral!("RAL 9010", "Pure white", "#FFFFFF"),
    ral!("RAL 9011", "Graphite black", "#1C1C1C"),
    ral!("RAL 9016", "Traffic white", "#F6F6F6"),
    ral!("RAL 9017", "Traffic black", "#1E1E1E"),
    ral!("RAL 9018", "Papyrus white", "#D7D7D7"),
    ral!("RAL 9022", "Pearl light grey", "#9C9C9C"),
    ral!("RAL 9023", "Pearl dark grey", "#828282"),
];
