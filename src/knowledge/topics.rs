//! The built-in Giza Plateau topic literal.
//!
//! Content only: labels, trigger keywords, and canned answers. Invariant
//! checks live in [`super::KnowledgeBase::from_topics`].

use super::Topic;

/// All shipped topics, in match-priority order.
#[allow(clippy::too_many_lines)]
pub(super) fn giza_topics() -> Vec<Topic> {
    vec![
        // Greetings & social
        Topic::new(
            "👋 Say Hello",
            ["hello", "hi", "hey", "greetings"],
            "Greetings, traveler! I am the Guardian of the Plateau. Ask me anything about the Great Pyramids.",
        ),
        Topic::new(
            "🙏 Thank You",
            ["thank", "thanks", "cool"],
            "You are most welcome. May your journey be full of discovery!",
        ),
        Topic::new(
            "👋 Goodbye",
            ["bye", "goodbye", "exit"],
            "Farewell! May Ra guide your path.",
        ),
        Topic::new(
            "🤖 Who are you?",
            ["who are you", "what are you", "bot"],
            "I am an AI guide programmed to share the secrets of the Giza Plateau.",
        ),
        // The basics
        Topic::new(
            "🏗️ Who built them?",
            ["who built", "builder", "khufu", "pharaoh"],
            "The Great Pyramid was built by Pharaoh Khufu. The other two were built by his son Khafre and grandson Menkaure.",
        ),
        Topic::new(
            "📅 When was it built?",
            ["when", "year", "date", "old", "time"],
            "The Great Pyramid was built during the Fourth Dynasty, around 2580–2560 BC.",
        ),
        Topic::new(
            "📏 How tall is it?",
            ["tall", "height", "high"],
            "It was originally 146.6 meters (481 ft) tall. Today, due to erosion and the loss of its capstone, it stands at about 138.5 meters (454 ft).",
        ),
        Topic::new(
            "📍 Where is it?",
            ["where", "location", "city", "map"],
            "The pyramids are located on the Giza Plateau, on the west bank of the Nile, near modern-day Cairo, Egypt.",
        ),
        // Construction facts
        Topic::new(
            "🧱 How many blocks?",
            ["blocks", "how many stones", "count"],
            "The Great Pyramid consists of approximately 2.3 million stone blocks.",
        ),
        Topic::new(
            "⚖️ How heavy is it?",
            ["weight", "heavy", "mass", "tons"],
            "The total mass is estimated at 5.9 million tons. A single block weighs between 2.5 and 15 tons!",
        ),
        Topic::new(
            "⛰️ What material?",
            ["material", "stone", "limestone", "granite"],
            "The core is local limestone. The inner chambers are pink granite from Aswan (800km away). The original outer casing was polished white Tura limestone.",
        ),
        Topic::new(
            "⛓️ Built by slaves?",
            ["slave", "labor", "workers"],
            "Common myth! Archaeologists have found worker villages proving it was built by 20,000–30,000 skilled, paid laborers who ate meat and bread.",
        ),
        Topic::new(
            "🧪 The 'Super' Mortar",
            ["mortar", "cement", "glue"],
            "The blocks are held together by a gypsum-based mortar. It is incredibly strong—stronger than the stones themselves—and its exact chemical composition remains a mystery.",
        ),
        // Mysteries & features
        Topic::new(
            "🦁 The Sphinx",
            ["sphinx", "cat", "lion"],
            "The Great Sphinx stands guard nearby. It has the body of a lion and the head of a Pharaoh (likely Khafre). It is the oldest known monumental sculpture in Egypt.",
        ),
        Topic::new(
            "🚪 What's Inside?",
            ["inside", "interior", "chamber", "room"],
            "Inside are three main chambers: the King's Chamber, the Queen's Chamber, and the unfinished Subterranean Chamber.",
        ),
        Topic::new(
            "❄️ Air Conditioning?",
            ["temperature", "heat", "cool", "air"],
            "Despite the scorching desert heat, the temperature inside the inner chambers stays a constant 20°C (68°F)—the same as the average temperature of the earth.",
        ),
        Topic::new(
            "🌌 Star Alignment",
            ["align", "star", "orion", "north"],
            "The pyramids are aligned to True North with accuracy within 3/60th of a degree. The three pyramids also align almost perfectly with the belt stars of the Orion constellation.",
        ),
        Topic::new(
            "🕳️ The Big Void",
            ["void", "scan", "hidden", "secret"],
            "In 2017, scientists using muon scanning discovered a massive 'Big Void' above the Grand Gallery. Its purpose is completely unknown.",
        ),
        Topic::new(
            "🛑 8 Sides?",
            ["sides", "concave", "eight", "shape"],
            "The Great Pyramid is not actually 4-sided. It is 8-sided! The faces are slightly concave (indented), a feature only visible from the air under specific lighting.",
        ),
        // Tourism
        Topic::new(
            "🎟️ Ticket Cost",
            ["ticket", "cost", "price", "entry"],
            "As of 2025, a general entry ticket to the Giza Plateau is roughly 540 EGP for tourists, but entering the Great Pyramid itself requires an extra, more expensive ticket.",
        ),
        Topic::new(
            "🐪 Camel Rides",
            ["camel", "horse", "ride"],
            "You can ride camels or horses at Giza, but be careful! Agree on a price *before* you get on, or you might get scammed.",
        ),
    ]
}
