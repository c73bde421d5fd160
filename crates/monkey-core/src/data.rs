//! The shipped monkey table.

use crate::MonkeyRecord;

const IMAGE_BASE: &str = "https://raw.githubusercontent.com/jamesmontemagno/app-monkeys/master";

/// Number of records in the shipped table.
pub const SHIPPED_COUNT: usize = 13;

fn image(file: &str) -> String {
    format!("{IMAGE_BASE}/{file}")
}

/// Builds the shipped records in declaration order.
pub fn shipped_records() -> Vec<MonkeyRecord> {
    vec![
        MonkeyRecord::new(
            "Baboon",
            "Africa & Asia",
            "Baboons are African and Arabian Old World monkeys belonging to the genus Papio, part of the subfamily Cercopithecinae.",
            image("baboon.jpg"),
            10_000,
            -8.783195,
            34.508523,
        ),
        MonkeyRecord::new(
            "Capuchin Monkey",
            "Central & South America",
            "The capuchin monkeys are New World monkeys of the subfamily Cebinae.",
            image("capuchin.jpg"),
            23_000,
            12.769013,
            -85.602364,
        ),
        MonkeyRecord::new(
            "Blue Monkey",
            "Central and East Africa",
            "The blue monkey or diademed monkey is a species of Old World monkey native to Central and East Africa.",
            image("bluemonkey.jpg"),
            12_000,
            1.957709,
            37.297204,
        ),
        MonkeyRecord::new(
            "Squirrel Monkey",
            "Central & South America",
            "The squirrel monkeys are the New World monkeys of the genus Saimiri.",
            image("saimiri.jpg"),
            11_000,
            -8.783195,
            -55.491477,
        ),
        MonkeyRecord::new(
            "Golden Lion Tamarin",
            "Brazil",
            "The golden lion tamarin also known as the golden marmoset, is a small New World monkey of the family Callitrichidae.",
            image("tamarin.jpg"),
            19_000,
            -14.235004,
            -51.92528,
        ),
        MonkeyRecord::new(
            "Howler Monkey",
            "South America",
            "Howler monkeys are among the largest of the New World monkeys. Fifteen species are currently recognised.",
            image("alouatta.jpg"),
            8_000,
            -8.783195,
            -55.491477,
        ),
        MonkeyRecord::new(
            "Japanese Macaque",
            "Japan",
            "The Japanese macaque is a terrestrial Old World monkey species native to Japan.",
            image("macasa.jpg"),
            1_000,
            36.204824,
            138.252924,
        ),
        MonkeyRecord::new(
            "Mandrill",
            "Southern Cameroon, Gabon, and Congo",
            "The mandrill is a primate of the Old World monkey family, closely related to the baboons and drills.",
            image("mandrill.jpg"),
            17_000,
            7.369722,
            12.354722,
        ),
        MonkeyRecord::new(
            "Proboscis Monkey",
            "Borneo",
            "The proboscis monkey or long-nosed monkey is endemic to the south-east Asian island of Borneo.",
            image("borneo.jpg"),
            15_000,
            0.961883,
            114.55485,
        ),
        MonkeyRecord::new(
            "Sebastian",
            "Seattle",
            "A little trouble maker who loves traveling and tweeting @MotzMonkeys.",
            image("sebastian.jpg"),
            1,
            47.606209,
            -122.332071,
        ),
        MonkeyRecord::new(
            "Henry",
            "Phoenix",
            "An adorable monkey traveling the world with Heather and live tweets his adventures @MotzMonkeys.",
            image("henry.jpg"),
            1,
            33.448377,
            -112.074037,
        ),
        MonkeyRecord::new(
            "Red-shanked douc",
            "Vietnam",
            "The red-shanked douc is among the most colourful of all primates.",
            image("douc.jpg"),
            1_300,
            16.111648,
            108.262122,
        ),
        MonkeyRecord::new(
            "Mooch",
            "Seattle",
            "An adorable monkey traveling with Heather and live tweeting @MotzMonkeys.",
            image("Mooch.PNG"),
            1,
            47.608013,
            -122.335167,
        ),
    ]
}
