//! Search facet table.
//!
//! Each facet is one independently filterable dimension of a card. The table below is the
//! single source of truth for the query parameter a facet is read from, the array column it
//! filters, and the vocabulary its values must come from.

use phf::phf_set;

/// Filterable card dimensions backed by a text array column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Rarity,
    Type,
    Supertype,
    Color,
    Subtype,
    Format,
    Status,
    MultiverseId,
    Set,
}

/// Static description of a facet.
#[derive(Debug)]
pub struct FacetSpec {
    pub facet: Facet,
    /// Query parameter name.
    pub param: &'static str,
    /// Additional parameter names accepted for the same facet.
    pub aliases: &'static [&'static str],
    /// Text array column holding the card's values for this facet.
    pub column: &'static str,
    /// Allowed values; `None` for open-ended reference data.
    pub domain: Option<&'static phf::Set<&'static str>>,
    /// Values are lower-cased before validation and binding.
    pub case_insensitive: bool,
}

/// Facets in translation order; indexed by `Facet as usize`.
pub static FACETS: [FacetSpec; 9] = [
    FacetSpec {
        facet: Facet::Rarity,
        param: "rarity",
        aliases: &[],
        column: "rarities",
        domain: Some(&RARITIES),
        case_insensitive: false,
    },
    FacetSpec {
        facet: Facet::Type,
        param: "type",
        aliases: &[],
        column: "types",
        domain: Some(&TYPES),
        case_insensitive: false,
    },
    FacetSpec {
        facet: Facet::Supertype,
        param: "supertype",
        aliases: &[],
        column: "supertypes",
        domain: Some(&SUPERTYPES),
        case_insensitive: false,
    },
    FacetSpec {
        facet: Facet::Color,
        param: "color",
        aliases: &[],
        column: "colors",
        domain: Some(&COLORS),
        case_insensitive: false,
    },
    FacetSpec {
        facet: Facet::Subtype,
        param: "subtype",
        aliases: &[],
        column: "subtypes",
        domain: Some(&SUBTYPES),
        case_insensitive: true,
    },
    FacetSpec {
        facet: Facet::Format,
        param: "format",
        aliases: &[],
        column: "formats",
        domain: Some(&FORMATS),
        case_insensitive: false,
    },
    FacetSpec {
        facet: Facet::Status,
        param: "status",
        aliases: &[],
        column: "status",
        domain: Some(&STATUSES),
        case_insensitive: false,
    },
    FacetSpec {
        facet: Facet::MultiverseId,
        param: "multiverseid",
        aliases: &["m"],
        column: "mids",
        domain: None,
        case_insensitive: false,
    },
    FacetSpec {
        facet: Facet::Set,
        param: "set",
        aliases: &[],
        column: "sets",
        domain: None,
        case_insensitive: true,
    },
];

impl Facet {
    pub const ALL: [Facet; 9] = [
        Facet::Rarity,
        Facet::Type,
        Facet::Supertype,
        Facet::Color,
        Facet::Subtype,
        Facet::Format,
        Facet::Status,
        Facet::MultiverseId,
        Facet::Set,
    ];

    pub fn spec(self) -> &'static FacetSpec {
        &FACETS[self as usize]
    }

    pub fn param(self) -> &'static str {
        self.spec().param
    }

    pub fn column(self) -> &'static str {
        self.spec().column
    }

    /// Facet read from the given query parameter name, if any.
    pub fn from_param(name: &str) -> Option<Self> {
        FACETS
            .iter()
            .find(|spec| spec.param == name || spec.aliases.contains(&name))
            .map(|spec| spec.facet)
    }

    /// Normalize a raw value and check it against the facet's domain.
    ///
    /// Returns `Ok(None)` for values that carry no constraint (empty free-form values).
    pub fn validate(self, raw: &str) -> Result<Option<String>, String> {
        let spec = self.spec();
        let value = if spec.case_insensitive {
            raw.to_lowercase()
        } else {
            raw.to_string()
        };

        match spec.domain {
            Some(domain) if domain.contains(value.as_str()) => Ok(Some(value)),
            Some(_) => Err(format!("The {} '{}' is not recognized", spec.param, raw)),
            None if value.is_empty() => Ok(None),
            None => Ok(Some(value)),
        }
    }
}

pub static COLORS: phf::Set<&'static str> = phf_set! {
    "red", "black", "blue", "white", "green",
};

pub static RARITIES: phf::Set<&'static str> = phf_set! {
    "common", "uncommon", "rare", "mythic", "special", "basic",
};

pub static TYPES: phf::Set<&'static str> = phf_set! {
    "creature", "land", "tribal", "phenomenon", "summon", "enchantment", "sorcery",
    "vanguard", "instant", "planeswalker", "artifact", "plane", "scheme",
};

pub static SUPERTYPES: phf::Set<&'static str> = phf_set! {
    "legendary", "basic", "world", "snow", "ongoing",
};

pub static FORMATS: phf::Set<&'static str> = phf_set! {
    "commander", "standard", "modern", "vintage", "legacy",
};

pub static STATUSES: phf::Set<&'static str> = phf_set! {
    "legal", "banned", "restricted",
};

pub static SUBTYPES: phf::Set<&'static str> = phf_set! {
    "advisor", "ajani", "ally", "angel", "antelope", "ape", "arcane", "archer", "archon",
    "artificer", "ashiok", "assassin", "assembly-worker", "atog", "aura", "aurochs", "avatar",
    "badger", "barbarian", "basilisk", "bat", "bear", "beast", "beeble", "berserker", "bird",
    "blinkmoth", "boar", "bolas", "bringer", "brushwagg", "camarid", "camel", "caribou",
    "carrier", "cat", "centaur", "cephalid", "chandra", "chimera", "citizen", "cleric",
    "cockatrice", "construct", "contraption", "coward", "crab", "crocodile", "curse", "cyclops",
    "dack", "daretti", "dauthi", "demon", "desert", "deserter", "devil", "djinn", "domri",
    "dragon", "drake", "dreadnought", "drone", "druid", "dryad", "dwarf", "efreet", "elder",
    "eldrazi", "elemental", "elephant", "elf", "elk", "elspeth", "equipment", "eye", "faerie",
    "ferret", "fish", "flagbearer", "forest", "fortification", "fox", "freyalise", "frog",
    "fungus", "gargoyle", "garruk", "gate", "germ", "giant", "gideon", "gnome", "goat", "goblin",
    "god", "golem", "gorgon", "graveborn", "gremlin", "griffin", "hag", "harpy", "hellion",
    "hippo", "hippogriff", "homarid", "homunculus", "horror", "horse", "hound", "human", "hydra",
    "hyena", "illusion", "imp", "incarnation", "insect", "island", "jace", "jellyfish",
    "juggernaut", "karn", "kavu", "kiora", "kirin", "kithkin", "knight", "kobold", "kor", "koth",
    "kraken", "lair", "lamia", "lammasu", "leech", "leviathan", "lhurgoyf", "licid", "liliana",
    "lizard", "locus", "manticore", "masticore", "mercenary", "merfolk", "metathran", "mine",
    "minion", "minotaur", "monger", "mongoose", "monk", "moonfolk", "mountain", "mutant", "myr",
    "mystic", "naga", "nahiri", "nautilus", "nephilim", "nightmare", "nightstalker", "ninja",
    "nissa", "nixilis", "noggle", "nomad", "nymph", "ob", "octopus", "ogre", "ooze", "orb", "orc",
    "orgg", "ouphe", "ox", "oyster", "pegasus", "pentavite", "pest", "phelddagrif", "phoenix",
    "pincher", "pirate", "plains", "plant", "power-plant", "praetor", "prism", "processor",
    "rabbit", "ral", "rat", "rebel", "reflection", "rhino", "rigger", "rogue", "sable",
    "salamander", "samurai", "sand", "saproling", "sarkhan", "satyr", "scarecrow", "scion",
    "scorpion", "scout", "serf", "serpent", "shade", "shaman", "shapeshifter", "sheep", "shrine",
    "siren", "skeleton", "slith", "sliver", "slug", "snake", "soldier", "soltari", "sorin",
    "spawn", "specter", "spellshaper", "sphinx", "spider", "spike", "spirit", "splinter",
    "sponge", "squid", "squirrel", "starfish", "surrakar", "survivor", "swamp", "tamiyo",
    "teferi", "tetravite", "tezzeret", "thalakos", "thopter", "thrull", "tibalt", "tower", "trap",
    "treefolk", "triskelavite", "troll", "turtle", "ugin", "unicorn", "urza's", "vampire",
    "vedalken", "venser", "viashino", "volver", "vraska", "wall", "warrior", "weird", "werewolf",
    "whale", "wizard", "wolf", "wolverine", "wombat", "worm", "wraith", "wurm", "xenagos", "yeti",
    "zombie", "zubera",
};
