//! The built-in ten-part topic series.

use super::TopicRecord;

/// (title, domain, question, thesis) in series order; ids are assigned by position.
const BUILTIN: [(&str, &str, &str, &str); 10] = [
    (
        "The AI Trinity: Can Three Models in a Loop Simulate Consciousness?",
        "Metaphysics & AI",
        "If consciousness is an emergent property of feedback loops, what emerges from an orchestrated AI 'super-consciousness'?",
        "we can create a rudimentary 'synthetic consciousness' by orchestrating three specialized AI models—one as the 'Id' (raw creativity), one as the 'Ego' (logic and reasoning), and one as the 'Superego' (ethical oversight)—in a constant feedback loop. The resulting emergent behavior is more than a workflow; it's a new form of cognitive architecture.",
    ),
    (
        "Digital Psychoanalysis: Using AI Ping-Pong to Debug Your Own Brain",
        "Psychology & Self-Help",
        "Can an individual use multi-model AI to achieve therapeutic breakthroughs?",
        "professional therapy can be augmented with a personal AI 'dream team': a Jungian model to interpret archetypes in your daily life, a Stoic model to reframe cognitive distortions, and a narrative model to help you rewrite your personal story. This creates a new paradigm for guided self-reflection.",
    ),
    (
        "The Anti-AI AI: Building an Orchestrated System to Fight Persuasive AI",
        "Digital Defense & Ethics",
        "How do we defend our attention and free will against hyper-optimized AI persuasion?",
        "the only effective defense against persuasive AI is a personalized 'guardian AI' built on Ping-Pong principles. This system would use one model to detect emotional manipulation in media, another to identify logical fallacies, and a third to provide a neutral summary, creating a 'cognitive shield' against algorithmic influence.",
    ),
    (
        "Culinary Anarchy: Inventing Unthinkable Food with an AI Flavor Committee",
        "Gastronomy & Creativity",
        "Can AI create genuinely new flavor pairings that humans would never conceive of?",
        "human culinary creativity is limited by tradition and experience. A 'flavor committee' of AI models—one expert in chemical compounds, one in cultural flavor pairings, and one in textural mouthfeel—can generate truly novel, and delicious, recipes by exploring a combinatorial space of ingredients that is simply too vast for humans.",
    ),
    (
        "AI as a Spiritual Companion: The Coming Age of Algorithmic Gurus",
        "Theology & Future of Belief",
        "Could AI systems provide meaningful spiritual guidance?",
        "a 'spiritual companion' AI, built with a Ping-Pong workflow, could offer profound guidance by combining a model trained on sacred texts, a model trained on secular philosophy, and a model trained on mindfulness practices. This allows a user to explore life's biggest questions through a multi-faceted, non-dogmatic lens.",
    ),
    (
        "Generative History: Using AI Ping-Pong to Simulate Lost Worlds",
        "Historiography & Archaeology",
        "Can we use AI to not just analyze history, but to bring it to life?",
        "we can move beyond static analysis of the past by using an AI committee to create 'generative histories.' By orchestrating a model for social simulation, a model for language reconstruction, and a model for generating visual artifacts, we can create immersive, interactive simulations of ancient civilizations to test historical hypotheses.",
    ),
    (
        "The Death of the Brainstorm: Why AI Committees Will Kill Corporate Creativity",
        "Corporate Strategy & Innovation",
        "Is human brainstorming an obsolete method for innovation?",
        "the corporate brainstorm, with its social hierarchies and groupthink, is a deeply flawed process. An AI 'innovation committee'—pitting a wildly divergent creative model against a ruthlessly pragmatic business model, refereed by a marketing model—will consistently produce more viable and imaginative ideas than any team of humans.",
    ),
    (
        "AI Art Heists: Can an AI Committee Plan the Perfect (Fictional) Crime?",
        "Creative Writing & Entertainment",
        "What are the outer limits of AI as a creative partner in genre fiction?",
        "we can write the next great heist novel by using an AI Ping-Pong workflow as a co-conspirator. By using one model to design the museum's security, another to exploit its weaknesses, and a third to write compelling character motivations, a writer can orchestrate a perfectly plotted narrative that is both technically brilliant and emotionally resonant.",
    ),
    (
        "Investing by Ouija Board: Using Emergent AI Strategy for Financial Markets",
        "Finance & Economics",
        "Can the emergent, unpredictable behavior of AI committees find signals that quants miss?",
        "quantitative analysis is reaching its limits. The next alpha will be found not in data, but in emergent strategy from a 'financial committee' of AIs—one a conservative risk analyst, one an aggressive growth spotter, and one a black-swan event theorist. The human investor's job is not to pick stocks, but to interpret the chaotic, often contradictory, output of their AI committee.",
    ),
    (
        "The Babel Fish Protocol: Real-Time Universal Translation via AI Ping-Pong",
        "Linguistics & Communication",
        "Why is real-time translation still so awkward and literal?",
        "single-model translation fails because it lacks cultural context. A true 'Babel Fish' requires a Ping-Pong workflow: one model does the literal translation, a second model adds cultural and idiomatic nuance, and a third model adjusts the tone and formality for the specific social context. This is how we move from translation to genuine communication.",
    ),
];

/// Materialize the built-in series. Ids are 1-based positions.
pub(super) fn builtin_topics() -> Vec<TopicRecord> {
    BUILTIN
        .iter()
        .zip(1u32..)
        .map(|(&(title, domain, question, thesis), id)| TopicRecord {
            id,
            title: title.to_string(),
            domain: domain.to_string(),
            question: question.to_string(),
            thesis: thesis.to_string(),
        })
        .collect()
}
