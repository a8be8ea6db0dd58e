use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "Swift", "Brave", "Clever", "Mighty", "Silent", "Golden", "Wild", "Noble",
    "Hodling", "Orange", "Sovereign", "Lightning", "Cold", "Stacking", "Humble", "Sly",
];

const NOUNS: &[&str] = &[
    "Satoshi", "Miner", "Node", "Whale", "Pleb", "Hasher", "Stacker", "Cypherpunk",
    "Falcon", "Viper", "Cobra", "Python", "Adder", "Mamba", "Boa", "Taipan",
];

pub fn generate_player_name() -> String {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    format!("{} {}", adjective, noun)
}
