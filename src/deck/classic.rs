//! The 16-slide dark deck: "Why RPI?" (slides 1-8) and "HVE-Core in
//! Practice" (slides 9-16).
use super::canvas::{Line, Rect, SlideCanvas, TextStyle};
use super::slides::{self, Timeline};
use super::{DeckAssets, SlideFn};
use crate::common::Result;

pub const FILE_NAME: &str = "hve-core-rpi-presentation.pptx";

pub(crate) const SLIDES: [SlideFn; 16] = [
    title,
    the_problem,
    why_it_happens,
    counterintuitive_insight,
    what_is_hve_core,
    rpi_pipeline,
    phase_deep_dive,
    quality_and_clear,
    chat_modes,
    demo_intro,
    live_demo,
    who_uses_hve_core,
    dogfooding,
    extension_ecosystem,
    learning_curve,
    getting_started,
];

fn title(c: &mut SlideCanvas, _: &DeckAssets) -> Result<()> {
    slides::title_block(c, 2.0, 6.0);
    c.notes(slides::WELCOME_NOTES);
    Ok(())
}

fn the_problem(c: &mut SlideCanvas, _: &DeckAssets) -> Result<()> {
    let red = c.theme().red;
    c.heading("The Problem", red);
    slides::problem_story(c, Rect(1.0, 1.8, 11.0, 4.5), 16.0);
    c.notes(slides::PROBLEM_NOTES);
    Ok(())
}

fn why_it_happens(c: &mut SlideCanvas, _: &DeckAssets) -> Result<()> {
    slides::why_it_happens(c);
    Ok(())
}

fn counterintuitive_insight(c: &mut SlideCanvas, _: &DeckAssets) -> Result<()> {
    slides::counterintuitive_insight(c);
    Ok(())
}

fn what_is_hve_core(c: &mut SlideCanvas, _: &DeckAssets) -> Result<()> {
    slides::hve_core_components(c);
    let summary = slides::component_summary(c);
    c.multi_text(Rect(0.8, 5.6, 11.0, 1.5), &summary);
    c.notes(slides::WHAT_IS_NOTES);
    Ok(())
}

fn rpi_pipeline(c: &mut SlideCanvas, assets: &DeckAssets) -> Result<()> {
    slides::picture_slide(c, "The RPI Pipeline", &assets.rpi, slides::PIPELINE_NOTES)
}

fn phase_deep_dive(c: &mut SlideCanvas, _: &DeckAssets) -> Result<()> {
    slides::phase_cards(c);
    c.notes(slides::PHASE_NOTES);
    Ok(())
}

fn quality_and_clear(c: &mut SlideCanvas, _: &DeckAssets) -> Result<()> {
    slides::quality_table(c);
    slides::clear_flow(c, 4.2, 4.9, 0.5, 5.15);
    let tertiary = c.theme().tertiary;
    c.text(
        Rect(1.5, 5.7, 10.0, 0.8),
        "Context clearing prevents mode contamination — the researcher's reasoning \
must not leak into the implementor's execution context.",
        TextStyle::new(13.0).color(tertiary).centered(),
    );
    c.notes(slides::CLEAR_NOTES);
    Ok(())
}

fn chat_modes(c: &mut SlideCanvas, _: &DeckAssets) -> Result<()> {
    slides::chat_mode_groups(c);
    let tertiary = c.theme().tertiary;
    c.text(
        Rect(0.8, 6.0, 11.0, 0.5),
        "Every mode enforces specific constraints — AI cannot bypass its designated role",
        TextStyle::new(13.0).color(tertiary),
    );
    c.notes(&format!(
        "{} That's what makes the framework reliable.",
        slides::CHAT_MODE_NOTES
    ));
    Ok(())
}

fn demo_intro(c: &mut SlideCanvas, _: &DeckAssets) -> Result<()> {
    let t = *c.theme();
    slides::demo_heading(c);
    slides::watch_items(
        c,
        &[
            ("1.", "How the researcher finds existing patterns (not invents code)", t.blue),
            ("2.", "How it cites specific files and line numbers", t.green),
            ("3.", "How the plan references the research artifacts", t.orange),
        ],
        4.2,
        0.7,
        0.5,
        16.0,
    );
    c.text(
        Rect(0.8, 6.5, 11.0, 0.4),
        "Demo: ~5 minutes in VS Code  •  Research → /clear → Plan",
        TextStyle::new(13.0).color(t.tertiary),
    );
    c.notes(
        "I'm going to run through Research and Plan live. Watch for three things: \
First, how the researcher searches the codebase instead of inventing code. \
Second, how it cites specific files and line numbers. \
Third, how the plan references the research artifacts. \
Demo flow: open VS Code, run /task-research, show output, /clear, \
run /task-plan with research file, show plan and details output.",
    );
    Ok(())
}

/// Stand-in shown while the presenter switches to VS Code.
fn live_demo(c: &mut SlideCanvas, _: &DeckAssets) -> Result<()> {
    let t = *c.theme();
    c.text(Rect(0.8, 2.5, 11.0, 1.0), "Live Demo", TextStyle::new(40.0).bold());
    c.accent_bar(3.3, t.green);
    c.multi_text(
        Rect(0.8, 3.7, 11.0, 1.5),
        &[
            Line::new("Switching to VS Code", 20.0, t.secondary),
            Line::gap(8.0),
            Line::new("/task-research  →  /clear  →  /task-plan", 16.0, t.tertiary),
        ],
    );
    c.notes(
        "Live demo in VS Code. Run /task-research on the prepared feature and walk through \
the cited files, then /clear and run /task-plan with the research file. \
If the live demo fails, switch to the pre-captured screenshots.",
    );
    Ok(())
}

fn who_uses_hve_core(c: &mut SlideCanvas, assets: &DeckAssets) -> Result<()> {
    slides::picture_slide(
        c,
        "Who Uses HVE-Core?",
        &assets.roles,
        "HVE-Core isn't just for developers. TPMs use project-planning for Requirements → \
PRD → ADO work items. Platform engineers use coding-standards for artifact authoring. \
Security engineers use security-planning for threat models. Data scientists have \
their own Spec → Notebook → Dashboard workflow. Roles don't share workflows — \
collections make that separation automatic.",
    )
}

fn dogfooding(c: &mut SlideCanvas, _: &DeckAssets) -> Result<()> {
    slides::dogfooding(c, "Dogfooding + Enterprise Validation");
    Ok(())
}

fn extension_ecosystem(c: &mut SlideCanvas, _: &DeckAssets) -> Result<()> {
    slides::extension_ecosystem(c);
    Ok(())
}

fn learning_curve(c: &mut SlideCanvas, _: &DeckAssets) -> Result<()> {
    slides::honest_payoff(c);
    slides::version_timeline(
        c,
        &Timeline {
            heading_top: 5.2,
            heading_size: 16.0,
            top: 5.7,
            height: 0.45,
            size: 12.0,
            line_y: 5.92,
        },
    );
    c.notes(&format!(
        "{} The version timeline shows rapid iteration — v1.1.0 in January, breaking restructure \
at v2.0.0 nine days later, stable at v2.3.4 two weeks after that.",
        slides::LEARNING_CURVE_NOTES
    ));
    Ok(())
}

fn getting_started(c: &mut SlideCanvas, _: &DeckAssets) -> Result<()> {
    let t = *c.theme();
    c.heading("Getting Started", t.green);

    let install_methods = [
        (
            "VS Code Extension  •  10 seconds",
            "Zero-config\nInstall from marketplace",
            t.blue,
            "Recommended for most users",
        ),
        (
            "Peer Clone  •  2 minutes",
            "Customizable\nClone .github/ into your repo",
            t.orange,
            "For teams with custom needs",
        ),
        (
            "Codespaces  •  1 click",
            "Zero-config\nPre-built dev environment",
            t.green,
            "For quick exploration",
        ),
    ];
    for (i, (method, desc, color, note)) in install_methods.into_iter().enumerate() {
        let left = 0.8 + i as f64 * 4.0;
        c.pill(Rect(left, 1.5, 3.5, 0.6), method, color, 14.0);
        c.multi_text(
            Rect(left + 0.2, 2.3, 3.2, 1.5),
            &[
                Line::new(desc, 13.0, t.secondary),
                Line::gap(6.0),
                Line::new(note, 11.0, t.tertiary),
            ],
        );
    }

    c.text(
        Rect(0.8, 4.2, 11.0, 0.5),
        "github.com/microsoft/hve-core",
        TextStyle::new(20.0).bold().color(t.blue).centered(),
    );
    c.pill(
        Rect(3.0, 4.9, 7.0, 0.6),
        "Try /task-research on your next feature",
        t.green,
        16.0,
    );
    c.text(
        Rect(0.8, 6.0, 11.0, 1.0),
        "Questions?",
        TextStyle::new(36.0).bold().centered(),
    );

    c.notes(
        "Three ways to get started. VS Code Extension is fastest — 10 seconds, zero config. \
Peer Clone gives you customization — clone our .github/ folder into your repo. \
Codespaces gives you a full pre-built environment in one click. \
The call to action: try /task-research on your next feature. \
Don't change your whole workflow — just use the researcher once and see what happens. \
Resources: getting-started guide, first-workflow tutorial, docs/rpi/ documentation.",
    );
    Ok(())
}
