//! Static page content.
//!
//! Everything here is fixed at compile time and never mutated.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Characteristic {
    pub description: &'static str,
    /// Percentage in `0..=100`.
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breed {
    pub name: &'static str,
    pub description: &'static str,
    /// Popularity on a `0.0..=5.0` scale.
    pub popularity: Option<f32>,
}

pub const TITLE: &str = "All About Cats";

pub const INTRO: &str = "Cats are fascinating creatures that have been domesticated for thousands of years. \
They are known for their independence, agility, and affectionate nature.";

pub const OUTRO: &str = "Whether you're a cat owner or just an admirer, these furry friends continue \
to captivate us with their charm and mystery.";

/// Shown until the first fact is generated.
pub const INITIAL_FUN_FACT: &str = "Cats sleep for about 70% of their lives.";

pub const SECTIONS: [&str; 5] = ["Home", "Characteristics", "Gallery", "Breeds", "Fun Facts"];

pub static CHARACTERISTICS: [Characteristic; 5] = [
    Characteristic {
        description: "Excellent hunters with sharp claws and teeth",
        rating: Some(95),
    },
    Characteristic {
        description: "Flexible bodies and quick reflexes",
        rating: Some(90),
    },
    Characteristic {
        description: "Keen senses, especially night vision",
        rating: Some(85),
    },
    Characteristic {
        description: "Exceptional hearing abilities",
        rating: Some(80),
    },
    Characteristic {
        description: "Communicate through vocalizations and body language",
        rating: Some(75),
    },
];

pub static BREEDS: [Breed; 5] = [
    Breed {
        name: "Siamese",
        description: "Known for their distinctive color points and vocal nature.",
        popularity: Some(4.5),
    },
    Breed {
        name: "Persian",
        description: "Recognized for their long, luxurious coat and flat face.",
        popularity: Some(4.7),
    },
    Breed {
        name: "Maine Coon",
        description: "One of the largest domestic cat breeds with a gentle temperament.",
        popularity: Some(4.8),
    },
    Breed {
        name: "British Shorthair",
        description: "Characterized by their round face and dense, plush coat.",
        popularity: Some(4.6),
    },
    Breed {
        name: "Scottish Fold",
        description: "Famous for their unique folded ears and owl-like appearance.",
        popularity: Some(4.3),
    },
];

pub const FUN_FACTS: [&str; 5] = [
    "A group of cats is called a clowder.",
    "Cats have over 20 vocalizations, including the meow.",
    "A cat's nose print is unique, like a human's fingerprint.",
    "Cats can jump up to six times their length.",
    "The first cat in space was French. Her name was Felicette.",
];

pub const CAT_IMAGES: [&str; 4] = [
    "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
    "https://images.unsplash.com/photo-1519052537078-e6302a4968d4?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
    "https://images.unsplash.com/photo-1495360010541-f48722b34f7d?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
    "https://images.unsplash.com/photo-1518791841217-8f162f1e1131?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
];

pub const FOOTER_ABOUT: &str =
    "We're passionate about cats and dedicated to sharing knowledge about these amazing creatures.";

pub const FOOTER_LINKS: [&str; 3] = ["Home", "Cat Care Tips", "Contact Us"];

pub const FOOTER_NEWSLETTER: &str = "Stay updated with our latest cat facts and tips!";

pub const FOOTER_SOCIAL: [&str; 3] = ["Facebook", "Twitter", "Instagram"];

pub const COPYRIGHT: &str = "© 2023 All About Cats";
