//! The nine composition stages.
//!
//! Each stage is a pure function; its output is the next stage's input.
//! Topic-invariant blocks (research points, skeptic view, implications,
//! conclusion) are the same for every topic.

use super::structure::{ArgumentStructure, SCENARIO_PLACEHOLDER, SKEPTIC_PLACEHOLDER, Section};
use super::template::render_template;
use super::{ComposerSettings, Document};
use crate::catalog::TopicRecord;
use crate::error::Result;

const ANGLE_TEMPLATE: &str = "The conventional wisdom in {domain} is dangerously outdated, a relic of a simpler time. \
We're trying to solve tomorrow's problems with yesterday's tools, forcing square pegs into round holes \
while a revolutionary new paradigm sits right in front of us. The same single-minded focus that the AI \
world is just now realizing has capped its potential at a mere 76% quality ceiling is the very same \
thinking that limits our progress in {domain}. It’s time for a new approach.";

const RESEARCH_POINTS: [&str; 4] = [
    "Single, monolithic solutions lead to brittle, inflexible systems that are easily overwhelmed by complexity.",
    "This single-point-of-failure mindset creates bottlenecks, stifles innovation, and fails to deliver robust outcomes.",
    "The human's role must elevate from a mere operator to a strategic 'workflow orchestrator.'",
    "This shift moves value from execution to design, from labor to intellectual leadership.",
];

const SYNTHESIS_TEMPLATE: &str = "{angle}\n\nThe philosophy of AI Ping-Pong—the art of orchestrating a committee of specialized AI models \
to achieve a goal no single model can—offers a powerful new lens through which to view the challenges in {domain}. \
This isn't about simply adding more technology; it's about fundamentally rethinking our approach to problem-solving.\n\n\
### The Flaw in Our Current Thinking\n\nFor too long, we have operated under the assumption that a single, monolithic \
solution—a single strategy, a single platform, a single expert—is the path to success in {domain}. \
{first_point} We see this in the AI world, where single-model approaches lead to context degradation, \
factual inaccuracies, and a frustrating lack of genuine insight. We are making the exact same mistake.\n\n\
{second_point} It's an approach that doesn't scale with the complexity of the real world.";

const CORE_PARADIGM_TEMPLATE: &str = "### A New Paradigm: The Power of the Committee\n\nHere is the counterintuitive but powerful truth: **{thesis}**\n\n\
This isn't just a theoretical improvement; it's a paradigm shift. Imagine applying the principles of AI Ping-Pong here. \
Instead of relying on one generalist tool or process, we would orchestrate a workflow of specialists.\n\n\
In this new model, the human's role elevates from a mere operator to a strategic 'workflow orchestrator.' \
The goal is not to perform the task, but to design the system that performs the task. This moves the value from \
execution to design, from labor to intellectual leadership. It’s about having the wisdom to choose the right \
specialists for the job and the skill to make them work together seamlessly.";

const SCENARIO_HEADING: &str = "### A Glimpse into the Future: A Practical Scenario";

const SKEPTIC_HEADING: &str = "### The Skeptic's View: Acknowledging the Hurdles";

const IMPLICATIONS: &str = "### The Unseen Implications\n\nThis shift has profound, second-order consequences. It will create new roles and \
render others obsolete. It will demand new skills centered on systems thinking, collaboration, and cross-disciplinary \
expertise. It will force us to develop new ways of measuring quality, moving from simple output metrics to evaluating \
the health and efficiency of the entire orchestrated system.\n\nMost importantly, it will allow us to tackle problems of a \
complexity we previously couldn't imagine. By combining the strengths of diverse, specialized agents—whether they are AI \
models or human experts—we can create a whole that is vastly greater than the sum of its parts.";

const SKEPTIC_TEXT: &str = "Of course, this vision is not without its challenges. How do you prevent emergent, unwanted behaviors in such a complex system? \
Who is responsible when an AI committee produces a harmful or nonsensical outcome? And doesn't this create an even more opaque \
'black box' that is harder to audit and understand than a single model?\n\nThese are valid concerns. The answer lies in robust \
human oversight and the development of 'auditor' AIs whose sole job is to monitor the committee's process, flag anomalies, \
and ensure the final output aligns with human values. The complexity is a feature, not a bug, but it requires a new class of \
tools and a new set of skills focused on managing that complexity responsibly. The solution is not to fear the complexity, but \
to build better systems to harness it.";

const SCENARIO_TEMPLATE: &str = "Let’s make this concrete. Imagine a team trying to solve a complex challenge in {domain}. \
In the old paradigm, they would gather in a room and brainstorm, limited by their collective biases and the \
loudest voice in the room.\n\nIn the new paradigm, a human orchestrator assembles their AI committee. \
They task the 'divergent thinking' model with generating a hundred wild ideas. The 'pragmatism' model immediately \
discards 90 for being physically impossible or absurdly expensive. The remaining 10 are passed to a 'systems modeling' \
AI, which maps out their potential second-order consequences. The human orchestrator, observing this high-speed dialectic, \
doesn't just pick the 'best' idea; they identify a novel synthesis of three different ideas that no single participant, \
human or AI, would have conceived of alone. This is the power of orchestrated creativity.";

const CONCLUSION: &str = "\n\n### The Future is Orchestrated\n\nThe debate is over. The pursuit of a single, perfect solution is a dead end. \
The future belongs to the orchestrators—the leaders who can assemble, manage, and guide committees of specialists to \
achieve breakthrough results.\n\nThe principles outlined in the AI Ping-Pong methodology are not just about writing \
better content with AI; they are a blueprint for a new era of problem-solving. The question is no longer *if* this \
shift will happen, but who will have the vision to lead it. Those who continue to cling to the single-model, monolithic \
mindset will be left behind, capped by the same quality and innovation ceilings that an entire industry is now desperately \
trying to escape.";

const TITLE_TEMPLATE: &str = "# Part {id}/{total}: {title}";

const SUBTITLE_TEMPLATE: &str = "### *An opinion piece on why the future of {domain} depends on embracing the core idea \
that {thesis}*";

const CITATION_TEMPLATE: &str = "*Inspired by the philosophy of multi-model orchestration in \"[{article_title}]({article_url})\" by {article_author}*";

/// Stage 1: the opening provocation.
pub fn define_angle(topic: &TopicRecord) -> Result<String> {
    Ok(render_template(ANGLE_TEMPLATE, &[("domain", topic.domain.as_str())])?)
}

/// Stage 2: the generic research points, identical for every topic.
pub fn gather_research() -> &'static [&'static str; 4] {
    &RESEARCH_POINTS
}

/// Stage 3: weave the angle and research into the introduction.
pub fn synthesize(topic: &TopicRecord, angle: &str, research: &[&str; 4]) -> Result<String> {
    Ok(render_template(
        SYNTHESIS_TEMPLATE,
        &[
            ("angle", angle),
            ("domain", topic.domain.as_str()),
            ("first_point", research[0]),
            ("second_point", research[1]),
        ],
    )?)
}

/// Stage 4: lay out the five sections, leaving sentinels for stages 5 and 6.
pub fn structure(topic: &TopicRecord, introduction: String) -> Result<ArgumentStructure> {
    let core_paradigm = render_template(CORE_PARADIGM_TEMPLATE, &[("thesis", topic.thesis.as_str())])?;

    Ok(ArgumentStructure::new(
        introduction,
        core_paradigm,
        format!("{}\n\n{}", SCENARIO_HEADING, SCENARIO_PLACEHOLDER),
        format!("{}\n\n{}", SKEPTIC_HEADING, SKEPTIC_PLACEHOLDER),
        IMPLICATIONS.to_string(),
    ))
}

/// Stage 5: fill the skeptic view with the standard counter-arguments.
pub fn validate_claims(mut argument: ArgumentStructure) -> Result<ArgumentStructure> {
    argument.fill_placeholder(Section::SkepticView, SKEPTIC_TEXT)?;
    Ok(argument)
}

/// Stage 6: fill the scenario for the topic's domain.
pub fn develop_scenario(
    topic: &TopicRecord,
    mut argument: ArgumentStructure,
) -> Result<ArgumentStructure> {
    let scenario = render_template(SCENARIO_TEMPLATE, &[("domain", topic.domain.as_str())])?;
    argument.fill_placeholder(Section::Scenario, &scenario)?;
    Ok(argument)
}

/// Stage 7: flatten the completed structure in canonical section order.
pub fn analyze_coherence(argument: ArgumentStructure) -> Result<String> {
    argument.ensure_complete()?;
    Ok(argument.flatten())
}

/// Stage 8: append the concluding block.
pub fn refine_prose(mut coherent: String) -> String {
    coherent.push_str(CONCLUSION);
    coherent
}

/// Stage 9: prepend title, subtitle and citation.
pub fn final_format(
    topic: &TopicRecord,
    polished: &str,
    settings: &ComposerSettings,
) -> Result<Document> {
    let id = topic.id.to_string();
    let total = settings.series_length.to_string();
    let title = render_template(
        TITLE_TEMPLATE,
        &[("id", id.as_str()), ("total", total.as_str()), ("title", topic.title.as_str())],
    )?;

    let domain = topic.domain.to_lowercase();
    let thesis = lowercase_first(&topic.thesis);
    let subtitle = render_template(
        SUBTITLE_TEMPLATE,
        &[("domain", domain.as_str()), ("thesis", thesis.as_str())],
    )?;

    let article = &settings.base_article;
    let citation = render_template(
        CITATION_TEMPLATE,
        &[
            ("article_title", article.title.as_str()),
            ("article_url", article.url.as_str()),
            ("article_author", article.author.as_str()),
        ],
    )?;

    Ok(Document::new(format!(
        "{}\n\n{}\n\n{}\n\n{}",
        title, subtitle, citation, polished
    )))
}

/// Lower-case the first character, leaving the rest untouched.
fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
