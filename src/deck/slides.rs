//! Slide bodies that appear in both the classic and the enhanced deck.
use super::canvas::{Line, Rect, SlideCanvas, TextStyle};
use crate::common::{RGBColor, Result};
use crate::ooxml::pptx::AutoShapeType;
use std::path::Path;

pub(crate) const DECK_TITLE: &str = "HVE-Core and the RPI Framework";

pub(crate) const WELCOME_NOTES: &str = "Welcome. Over the next 30 minutes I'll show you why the way most teams use AI \
coding assistants is fundamentally broken — and how a constraint-based framework \
called RPI fixes it. We'll cover the problem, the framework, a live demo, and \
how different roles use it today.";

pub(crate) const PROBLEM_NOTES: &str = "Raise your hand if this has happened to you. The AI generates something that looks \
right. It compiles. Then you deploy and discover it used patterns from 3 years ago, \
missed your naming conventions, and broke two downstream services. \
This is the universal failure mode of AI-assisted development.";

pub(crate) const WHAT_IS_NOTES: &str = "HVE-Core is an enterprise-ready prompt engineering framework. 22 custom agents, \
27 prompts, 24 instruction files, 1 skill, and 10 collections. Agents define what \
AI can and cannot do. Instructions encode coding standards. Prompts are how users \
interact. Collections bundle artifacts for specific roles — a developer gets different \
tools than a TPM.";

pub(crate) const PIPELINE_NOTES: &str = "Each phase converts one form of understanding into the next. Uncertainty becomes \
knowledge. Knowledge becomes strategy. Strategy becomes working code. Working code \
becomes validated code. The /clear markers between phases prevent context \
contamination — the researcher's reasoning must not leak into the implementor.";

pub(crate) const PHASE_NOTES: &str = "The constraints row is the key architectural element. The researcher cannot implement \
— so it searches instead of inventing. The planner cannot implement — so it sequences \
instead of coding. The implementor follows the plan — no creative decisions. The \
reviewer cannot modify code — only validate. Each constraint forces the AI into its \
correct mode of operation.";

pub(crate) const CLEAR_NOTES: &str = "For TPMs: the traceability row is your strongest argument for RPI adoption. \
Every line of code traces back through a plan to a research finding. \
For everyone: the /clear rule sounds counterintuitive — why throw away context? \
Because context contamination causes the researcher's reasoning patterns to leak \
into the implementor, creating mode confusion. Each phase needs a clean start \
with only its designated inputs.";

pub(crate) const CHAT_MODE_NOTES: &str = "Four modes form the RPI cycle. Two additional modes serve specialized functions. \
Prompt Builder creates the artifacts that configure the agents — it's meta-level. \
PR Review is an 8-dimension quality gate that complements Task Reviewer. \
Every mode has a constraint that prevents the AI from doing something specific.";

pub(crate) const LEARNING_CURVE_NOTES: &str = "Be honest with your team: the first RPI workflow feels slower. That's by design. \
You're building research artifacts that compound across features. By the third \
feature, the workflow feels natural and you'll wonder how you worked without it.";

/// Slide 1: deck title, subtitle and the overview pill. `top` is the title's top edge.
pub(crate) fn title_block(c: &mut SlideCanvas, top: f64, pill_top: f64) {
    let t = *c.theme();
    c.text(Rect(0.8, top, 11.0, 1.5), DECK_TITLE, TextStyle::new(44.0).bold());
    c.accent_bar(top + 1.2, t.blue);
    c.multi_text(
        Rect(0.8, top + 1.5, 11.0, 2.0),
        &[
            Line::new("Turning AI from a Code Generator into a Research Partner", 20.0, t.secondary),
            Line::gap(10.0),
            Line::new("A constraint-based framework for AI-assisted engineering", 16.0, t.tertiary),
        ],
    );
    c.pill(Rect(0.8, pill_top, 3.0, 0.5), "30-Minute Overview  •  Two Parts", t.blue, 12.0);
}

/// The prompt, the generated code and what went wrong.
pub(crate) fn problem_story(c: &mut SlideCanvas, at: Rect, bullet_size: f64) {
    let t = *c.theme();
    c.multi_text(
        at,
        &[
            Line::gap(8.0),
            Line::new("You: \"Build me a Terraform module for Azure IoT\"", 18.0, t.text),
            Line::gap(12.0),
            Line::new("AI: *immediately generates 2,000 lines of code*", 18.0, t.secondary),
            Line::gap(12.0),
            Line::bold("Reality:", 20.0, t.red),
            Line::new("  • Missing provider dependencies", bullet_size, t.red),
            Line::new("  • Wrong variable naming conventions", bullet_size, t.red),
            Line::new("  • Patterns from 3 years ago", bullet_size, t.red),
            Line::new("  • Broke two downstream services", bullet_size, t.red),
            Line::new("  • Used modules that don't exist in your registry", bullet_size, t.red),
            Line::gap(12.0),
            Line::bold("It looked right. It compiled. Then you deployed.", bullet_size, t.tertiary),
        ],
    );
    c.text(
        Rect(1.0, 6.5, 10.0, 0.5),
        "Raise your hand if this has happened to you.",
        TextStyle::new(14.0).color(t.tertiary),
    );
}

pub(crate) fn why_it_happens(c: &mut SlideCanvas) {
    let t = *c.theme();
    c.heading("Why It Happens", t.blue);

    c.card(
        Rect(1.5, 1.8, 4.0, 2.5),
        "Investigate?\n\n🔍\n\nSearch • Analyze • Understand",
        16.0,
        t.blue,
    );
    c.card(
        Rect(7.5, 1.8, 4.0, 2.5),
        "Implement!\n\n⌨️\n\nGenerate • Write • Ship",
        16.0,
        t.orange,
    );
    c.line((5.7, 3.0), (7.3, 3.0), t.red, 3.0);

    c.text(
        Rect(2.0, 4.8, 9.0, 0.8),
        "AI Writes First and Thinks Never",
        TextStyle::new(28.0).bold().centered(),
    );
    c.text(
        Rect(2.0, 5.7, 9.0, 0.5),
        "\"Plausible\" and \"correct\" aren't the same thing",
        TextStyle::new(16.0).color(t.tertiary).centered(),
    );

    c.notes(
        "The root cause: AI treats every request as an implementation request. \
It never separates investigation from implementation. It pattern-matches \
from training data instead of searching your actual codebase. \
The output looks plausible — but plausible and correct aren't the same thing.",
    );
}

pub(crate) fn counterintuitive_insight(c: &mut SlideCanvas) {
    let t = *c.theme();
    c.heading("The Counterintuitive Insight", t.blue);

    c.multi_text(
        Rect(1.5, 1.8, 10.0, 2.5),
        &[
            Line::new("\"The solution isn't teaching AI to be smarter.", 22.0, t.text),
            Line::gap(8.0),
            Line::new("It's preventing AI from doing certain things", 22.0, t.text),
            Line::new("at certain times.\"", 22.0, t.text),
        ],
    );
    c.accent_bar(3.8, t.blue);

    c.pill(Rect(1.5, 4.8, 4.5, 0.7), "Optimizing for plausible code", t.red, 16.0);
    c.line((6.2, 5.15), (7.0, 5.15), t.text, 3.0);
    c.pill(Rect(7.2, 4.8, 4.5, 0.7), "Optimizing for verified truth", t.green, 16.0);

    c.text(
        Rect(1.5, 6.0, 10.0, 0.5),
        "Constraints are features, not limitations",
        TextStyle::new(16.0).color(t.tertiary).centered(),
    );

    c.notes(
        "This is the philosophical foundation of HVE-Core. We don't try to make AI smarter. \
We constrain what it can do at each stage. A researcher that cannot write code will \
search instead of inventing. A planner that cannot implement will sequence instead \
of coding. Constraints force better behavior.",
    );
}

/// Heading, pitch, the five component counts and the delegation flow.
pub(crate) fn hve_core_components(c: &mut SlideCanvas) {
    let t = *c.theme();
    c.heading("What is HVE-Core?", t.blue);
    c.text(
        Rect(0.8, 1.5, 11.0, 0.6),
        "An enterprise-ready prompt engineering framework that transforms \
GitHub Copilot from a code-completion tool into a structured engineering partner.",
        TextStyle::new(15.0).color(t.secondary),
    );

    let components = [
        ("Agents\n22", t.blue),
        ("Prompts\n27", t.green),
        ("Instructions\n24", t.orange),
        ("Skills\n1", t.teal),
        ("Collections\n10", t.purple),
    ];
    for (i, (label, color)) in components.into_iter().enumerate() {
        let left = 0.8 + i as f64 * 2.4;
        c.pill(Rect(left, 2.4, 2.1, 1.2), label, color, 18.0);
    }

    c.text(
        Rect(0.8, 4.0, 11.0, 0.5),
        "Delegation Flow",
        TextStyle::new(18.0).bold(),
    );
    let flow = [
        ("User", t.tertiary),
        ("Prompt", t.green),
        ("Agent", t.blue),
        ("Instructions", t.orange),
    ];
    let last = flow.len() - 1;
    for (i, (item, color)) in flow.into_iter().enumerate() {
        let left = 1.0 + i as f64 * 2.8;
        c.card(Rect(left, 4.6, 2.0, 0.6), item, 14.0, color);
        if i < last {
            c.line((left + 2.1, 4.9), (left + 2.7, 4.9), color, 2.0);
        }
    }
}

/// The three component summary lines under the delegation flow.
pub(crate) fn component_summary<'a>(c: &SlideCanvas) -> [Line<'a>; 3] {
    let t = c.theme();
    [
        Line::new(
            "Agents define behavior and constraints. Instructions encode standards.",
            13.0,
            t.tertiary,
        ),
        Line::new(
            "Prompts are user entry points. Skills package domain knowledge.",
            13.0,
            t.tertiary,
        ),
        Line::new("Collections bundle everything for specific roles.", 13.0, t.tertiary),
    ]
}

/// A full-width diagram under a raised heading.
pub(crate) fn picture_slide(c: &mut SlideCanvas, title: &str, image: &Path, notes: &str) -> Result<()> {
    let t = *c.theme();
    c.text(Rect(0.8, 0.3, 10.0, 0.7), title, TextStyle::new(32.0).bold());
    c.accent_bar(0.9, t.blue);
    c.picture(image, Rect(0.3, 1.2, 12.7, 5.8))?;
    c.notes(notes);
    Ok(())
}

/// Heading and the four phase attribute cards.
pub(crate) fn phase_cards(c: &mut SlideCanvas) {
    let t = *c.theme();
    c.heading("Deep Dive: Each Phase", t.blue);

    let phases = [
        (
            "Research",
            t.blue,
            "Discover what exists",
            "CANNOT implement or modify code",
            "research.md with citations",
            "/task-research",
        ),
        (
            "Plan",
            t.green,
            "Sequence the work",
            "CANNOT implement or modify code",
            "plan.instructions.md + details.md",
            "/task-plan",
        ),
        (
            "Implement",
            t.orange,
            "Execute the plan",
            "MUST follow plan — no creative decisions",
            "Working code matching plan",
            "/task-implement",
        ),
        (
            "Review",
            t.purple,
            "Validate the output",
            "CANNOT modify code — only report findings",
            "8-dimension review report",
            "/task-review",
        ),
    ];

    const CARD_W: f64 = 2.9;
    const TOP: f64 = 1.5;
    for (i, (name, color, purpose, constraint, output, invocation)) in phases.into_iter().enumerate() {
        let left = 0.5 + i as f64 * 3.1;
        c.pill(Rect(left, TOP, CARD_W, 0.5), name, color, 16.0);
        c.multi_text(
            Rect(left + 0.1, TOP + 0.6, CARD_W - 0.2, 4.5),
            &[
                Line::bold("Purpose", 11.0, color),
                Line::new(purpose, 10.0, t.secondary),
                Line::gap(6.0),
                Line::bold("Core Constraint", 11.0, t.red),
                Line::bold(constraint, 10.0, t.text),
                Line::gap(6.0),
                Line::bold("Key Output", 11.0, color),
                Line::new(output, 10.0, t.secondary),
                Line::gap(6.0),
                Line::bold("Invocation", 11.0, color),
                Line::new(invocation, 10.0, t.tertiary),
            ],
        );
    }
}

/// Heading and the traditional / dimension / RPI comparison table.
pub(crate) fn quality_table(c: &mut SlideCanvas) {
    let t = *c.theme();
    c.text(
        Rect(0.8, 0.3, 10.0, 0.7),
        "Quality Comparison + The /clear Rule",
        TextStyle::new(28.0).bold(),
    );
    c.accent_bar(0.85, t.blue);

    c.pill(Rect(1.5, 1.2, 3.0, 0.35), "Traditional AI", t.red, 11.0);
    c.shape(
        AutoShapeType::RoundedRectangle,
        Rect(4.7, 1.2, 3.0, 0.35),
        "Dimension",
        t.header_fill,
        11.0,
        t.header_text,
    );
    c.pill(Rect(7.9, 1.2, 3.5, 0.35), "RPI Approach", t.green, 11.0);

    let dimensions = [
        ("Pattern matching", "Invents plausible patterns", "Finds actual codebase patterns"),
        ("Traceability", "No audit trail", "Research → Plan → Code"),
        ("Knowledge transfer", "Lost between sessions", "Preserved in artifacts"),
        ("Rework", "30-50% discarded", "< 10% rework"),
        ("Validation", "Manual review only", "8-dimension structured review"),
    ];
    for (i, (dim, trad, rpi)) in dimensions.into_iter().enumerate() {
        let top = 1.6 + i as f64 * 0.42;
        c.text(Rect(1.5, top, 3.0, 0.38), trad, TextStyle::new(10.0).color(t.red));
        c.text(Rect(4.7, top, 3.0, 0.38), dim, TextStyle::new(10.0).bold().centered());
        c.text(Rect(7.9, top, 3.5, 0.38), rpi, TextStyle::new(10.0).color(t.green));
    }
}

/// Phases separated by red `/clear` ovals. Connectors run at `line_y`.
pub(crate) fn clear_flow(c: &mut SlideCanvas, heading_top: f64, top: f64, height: f64, line_y: f64) {
    let t = *c.theme();
    c.text(
        Rect(0.8, heading_top, 11.0, 0.5),
        "The /clear Rule: Context Reset Between Phases",
        TextStyle::new(16.0).bold(),
    );

    let flow = [
        ("Research", t.blue),
        ("/clear", t.red),
        ("Plan", t.green),
        ("/clear", t.red),
        ("Implement", t.orange),
        ("/clear", t.red),
        ("Review", t.purple),
    ];
    let last = flow.len() - 1;
    for (i, (label, color)) in flow.into_iter().enumerate() {
        let left = 0.8 + i as f64 * 1.7;
        let width = if label == "/clear" {
            c.oval(Rect(left, top, 1.0, height), label, t.red, 11.0);
            1.0
        } else {
            c.pill(Rect(left, top, 1.4, height), label, color, 12.0);
            1.4
        };
        if i < last {
            c.line((left + width, line_y), (left + width + 0.2, line_y), t.connector, 2.0);
        }
    }
}

/// Heading and both groups of chat modes.
pub(crate) fn chat_mode_groups(c: &mut SlideCanvas) {
    let t = *c.theme();
    c.heading("Six Custom Chat Modes", t.blue);

    c.text(
        Rect(0.8, 1.5, 5.0, 0.4),
        "RPI Cycle",
        TextStyle::new(16.0).bold().color(t.blue),
    );
    let rpi_modes = [
        ("Task Researcher", "/task-research", "Cannot implement", t.blue),
        ("Task Planner", "/task-plan", "Cannot implement", t.green),
        ("Task Implementor", "/task-implement", "Follows plan only", t.orange),
        ("Task Reviewer", "/task-review", "Cannot modify code", t.purple),
    ];
    let last = rpi_modes.len() - 1;
    for (i, (name, command, constraint, color)) in rpi_modes.into_iter().enumerate() {
        let top = 2.0 + i as f64 * 0.95;
        mode_row(c, (0.8, 3.5), top, 1.5, (name, command, constraint, color));
        if i < last {
            c.line((2.0, top + 0.75), (2.0, top + 0.9), t.connector, 1.0);
        }
    }

    c.text(
        Rect(7.5, 1.5, 5.0, 0.4),
        "Complementary",
        TextStyle::new(16.0).bold().color(t.teal),
    );
    let complementary = [
        ("Prompt Builder", "/prompt-build", "Orchestrates subagents", t.teal),
        ("PR Review", "Agent picker", "Never modifies code", t.purple),
    ];
    for (i, mode) in complementary.into_iter().enumerate() {
        mode_row(c, (7.5, 10.2), 2.0 + i as f64 * 1.2, 2.5, mode);
    }
}

fn mode_row(
    c: &mut SlideCanvas,
    (left, detail_left): (f64, f64),
    top: f64,
    command_w: f64,
    (name, command, constraint, color): (&str, &str, &str, RGBColor),
) {
    let red = c.theme().red;
    c.pill(Rect(left, top, 2.5, 0.7), name, color, 12.0);
    c.text(Rect(detail_left, top, command_w, 0.35), command, TextStyle::new(11.0).color(color));
    c.text(
        Rect(detail_left, top + 0.35, 3.0, 0.35),
        &format!("Constraint: {}", constraint),
        TextStyle::new(10.0).color(red),
    );
}

/// Heading, subtitle and "Watch for:" label of the demo intro.
pub(crate) fn demo_heading(c: &mut SlideCanvas) {
    let t = *c.theme();
    c.text(
        Rect(0.8, 1.5, 11.0, 1.0),
        "Let's See It in Action",
        TextStyle::new(40.0).bold(),
    );
    c.accent_bar(2.3, t.green);
    c.text(
        Rect(0.8, 2.7, 11.0, 0.6),
        "Live Demo: RPI Workflow — Researching and Planning a Feature",
        TextStyle::new(20.0).color(t.secondary),
    );
    c.text(Rect(0.8, 3.6, 10.0, 0.4), "Watch for:", TextStyle::new(16.0).bold());
}

/// Numbered watch items, one every `pitch` inches from `top`.
pub(crate) fn watch_items(
    c: &mut SlideCanvas,
    items: &[(&str, &str, RGBColor)],
    top: f64,
    pitch: f64,
    height: f64,
    size: f64,
) {
    let secondary = c.theme().secondary;
    for (i, &(num, desc, color)) in items.iter().enumerate() {
        let row = top + i as f64 * pitch;
        c.pill(Rect(1.0, row, 0.5, height), num, color, size);
        c.text(Rect(1.7, row, 10.0, height), desc, TextStyle::new(size).color(secondary));
    }
}

pub(crate) fn dogfooding(c: &mut SlideCanvas, title: &str) {
    let t = *c.theme();
    c.heading(title, t.teal);

    c.multi_text(
        Rect(0.8, 1.5, 5.5, 5.0),
        &[
            Line::bold("Self-Referential Credibility", 18.0, t.teal),
            Line::gap(8.0),
            Line::new("• This presentation was planned using RPI", 14.0, t.secondary),
            Line::new("• Every agent was built by the Prompt Builder agent", 14.0, t.secondary),
            Line::new("• Instructions files follow their own rules", 14.0, t.secondary),
            Line::new("• Collection manifests are validated by their own CI", 14.0, t.secondary),
            Line::new("• Documentation is generated from the same artifacts", 14.0, t.secondary),
            Line::gap(8.0),
            Line::bold("If HVE-Core doesn't work on itself,", 14.0, t.tertiary),
            Line::bold("why would it work on your project?", 14.0, t.tertiary),
        ],
    );

    c.multi_text(
        Rect(7.0, 1.5, 5.5, 5.0),
        &[
            Line::bold("Validation Pipeline", 18.0, t.orange),
            Line::gap(8.0),
            Line::bold("Linting (7 jobs)", 14.0, t.blue),
            Line::new("  Markdown, YAML, frontmatter, links,", 12.0, t.tertiary),
            Line::new("  tables, collections metadata, version consistency", 12.0, t.tertiary),
            Line::gap(6.0),
            Line::bold("Analysis (2 jobs)", 14.0, t.green),
            Line::new("  PowerShell PSScriptAnalyzer, skill validation", 12.0, t.tertiary),
            Line::gap(6.0),
            Line::bold("Security (3 jobs)", 14.0, t.red),
            Line::new("  Dependency pinning, SHA staleness, copyright", 12.0, t.tertiary),
            Line::gap(6.0),
            Line::bold("Schema Validation", 14.0, t.purple),
            Line::new(
                "  Collection YAML → plugin generation → extension packaging",
                12.0,
                t.tertiary,
            ),
        ],
    );

    c.notes(
        "HVE-Core uses its own tools to build itself. This presentation was planned using \
the RPI workflow. Every agent was built by the Prompt Builder agent. The validation \
pipeline runs 12+ automated checks on every PR. If it doesn't work on itself, \
why would it work on your project? Self-referential credibility is the strongest \
argument for adoption.",
    );
}

/// Extension package table. `hve-core` is highlighted.
pub(crate) fn extension_ecosystem(c: &mut SlideCanvas) {
    let t = *c.theme();
    c.heading("Extension Ecosystem", t.purple);

    let headers = [
        ("Extension", 0.8, 3.0),
        ("Agents", 4.0, 1.2),
        ("Prompts", 5.3, 1.2),
        ("Instructions", 6.6, 1.5),
        ("Focus", 8.3, 4.0),
    ];
    for (name, left, width) in headers {
        c.pill(Rect(left, 1.5, width, 0.4), name, t.blue, 11.0);
    }

    let extensions = [
        ("hve-core", "21", "23", "18", "Core RPI + all foundations"),
        ("hve-ado", "9", "19", "10", "Azure DevOps integration"),
        ("hve-github", "9", "19", "10", "GitHub backlog management"),
        ("hve-project-planning", "13", "15", "5", "PRD / BRD / ADR workflows"),
        ("hve-security-planning", "9", "16", "5", "Threat modeling"),
        ("hve-rpi", "8", "14", "5", "Standalone RPI cycle"),
        ("hve-prompt-engineering", "8", "14", "5", "Artifact authoring"),
        ("hve-data-science", "1", "1", "0", "Data science workflows"),
    ];
    for (i, (ext, agents, prompts, instr, focus)) in extensions.into_iter().enumerate() {
        let top = 2.0 + i as f64 * 0.5;
        if i == 0 {
            c.pill(Rect(0.8, top, 3.0, 0.4), ext, t.blue, 11.0);
        } else {
            c.text(Rect(0.8, top, 3.0, 0.4), ext, TextStyle::new(11.0).color(t.secondary));
        }
        let count = TextStyle::new(11.0).centered();
        c.text(Rect(4.0, top, 1.2, 0.4), agents, count);
        c.text(Rect(5.3, top, 1.2, 0.4), prompts, count);
        c.text(Rect(6.6, top, 1.5, 0.4), instr, count);
        c.text(Rect(8.3, top, 4.0, 0.4), focus, TextStyle::new(11.0).color(t.tertiary));
    }

    c.text(
        Rect(0.8, 6.2, 11.0, 0.5),
        "Common base: 8 core agents + 5 core instructions shared across all extensions",
        TextStyle::new(13.0).bold().color(t.teal),
    );

    c.notes(
        "8 VS Code extensions organized by role. hve-core is the full package with 21 agents, \
23 prompts, and 18 instruction files. Specialized extensions like hve-ado and \
hve-github focus on specific workflows. All share a common base of 8 core agents \
and 5 core instructions. Pick the extension that matches your role.",
    );
}

/// Heading and the "Honest Truth" / "Payoff" columns.
pub(crate) fn honest_payoff(c: &mut SlideCanvas) {
    let t = *c.theme();
    c.heading("Learning Curve & Compounding Value", t.orange);

    c.pill(Rect(0.8, 1.5, 5.5, 0.5), "The Honest Truth", t.orange, 14.0);
    c.multi_text(
        Rect(0.8, 2.2, 5.5, 2.5),
        &[
            Line::bold("Your first RPI workflow will feel slower.", 18.0, t.orange),
            Line::gap(8.0),
            Line::new("You'll wonder why you can't just ask AI to code it.", 14.0, t.secondary),
            Line::new("You'll feel like the constraints are slowing you down.", 14.0, t.secondary),
            Line::new("You'll want to skip the research phase.", 14.0, t.secondary),
            Line::gap(8.0),
            Line::bold("That's normal. Stay with it.", 14.0, t.tertiary),
        ],
    );

    c.pill(Rect(7.0, 1.5, 5.5, 0.5), "The Payoff", t.green, 14.0);
    c.multi_text(
        Rect(7.0, 2.2, 5.5, 2.5),
        &[
            Line::bold("By your third feature, the workflow", 18.0, t.green),
            Line::bold("feels natural.", 18.0, t.green),
            Line::gap(8.0),
            Line::new("Research artifacts compound across features.", 14.0, t.secondary),
            Line::new("Plans reference previous research findings.", 14.0, t.secondary),
            Line::new("Rework drops below 10%.", 14.0, t.secondary),
            Line::gap(8.0),
            Line::bold("The framework pays for itself.", 14.0, t.tertiary),
        ],
    );
}

/// Placement of the release timeline strip.
pub(crate) struct Timeline {
    pub heading_top: f64,
    pub heading_size: f64,
    pub top: f64,
    pub height: f64,
    /// Version pill font size; the caption is one point smaller
    pub size: f64,
    pub line_y: f64,
}

pub(crate) fn version_timeline(c: &mut SlideCanvas, at: &Timeline) {
    let t = *c.theme();
    c.text(
        Rect(0.8, at.heading_top, 11.0, 0.4),
        "Evolution Timeline",
        TextStyle::new(at.heading_size).bold(),
    );

    let versions = [
        ("v1.1.0", "Jan 19", "Initial release", t.blue),
        ("v2.0.0", "Jan 28", "Breaking: agent restructure", t.red),
        ("v2.3.4", "Feb 13", "Stable + extensions", t.green),
    ];
    let last = versions.len() - 1;
    for (i, (version, date, desc, color)) in versions.into_iter().enumerate() {
        let left = 1.0 + i as f64 * 3.8;
        c.pill(Rect(left, at.top, 1.2, at.height), version, color, at.size);
        c.text(
            Rect(left + 1.4, at.top, 2.2, at.height),
            &format!("{} — {}", date, desc),
            TextStyle::new(at.size - 1.0).color(t.tertiary),
        );
        if i < last {
            c.line((left + 3.5, at.line_y), (left + 3.7, at.line_y), t.connector, 2.0);
        }
    }
}
