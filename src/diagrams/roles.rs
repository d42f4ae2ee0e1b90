//! Role to collection to workflow mapping, eight cards in a 4 x 2 grid.
use super::chrome::{header, text_label, title_block};
use super::layout::GridLayout;
use super::palette::*;
use super::{Diagram, Variant};
use crate::common::RGBColor;
use crate::images::svg::{SvgBuilder, SvgLine, SvgRect};
use log::trace;

const WIDTH: f64 = 1920.0;
const HEIGHT: f64 = 1000.0;
pub const CARD_W: f64 = 380.0;
pub const CARD_H: f64 = 320.0;
const HEADER_H: f64 = 60.0;

/// A team role and the collection it installs.
#[derive(Debug, Clone, Copy)]
pub struct Role {
    pub name: &'static str,
    pub color: RGBColor,
    pub collection: &'static str,
    pub workflow: &'static str,
}

pub const ROLES: [Role; 8] = [
    Role {
        name: "Developer",
        color: BLUE,
        collection: "hve-core",
        workflow: "RPI Pipeline",
    },
    Role {
        name: "TPM / Lead",
        color: GREEN,
        collection: "project-planning",
        workflow: "Reqs → PRD → WIT",
    },
    Role {
        name: "Platform Engineer",
        color: ORANGE,
        collection: "coding-standards",
        workflow: "Artifact Authoring",
    },
    Role {
        name: "OSS Contributor",
        color: TEAL,
        collection: "github",
        workflow: "Backlog Management",
    },
    Role {
        name: "Security Engineer",
        color: RED,
        collection: "security-planning",
        workflow: "Threat Modeling",
    },
    Role {
        name: "Data Scientist",
        color: PURPLE,
        collection: "data-science",
        workflow: "Spec → Notebook → Dashboard",
    },
    Role {
        name: "Project Planner",
        color: GREEN,
        collection: "project-planning",
        workflow: "PRD / BRD / ADR",
    },
    Role {
        name: "UX / DT Practitioner",
        color: TEAL,
        collection: "design-thinking",
        workflow: "9-Method Coaching",
    },
];

/// Card grid, centered and pushed 30px below center to clear the title.
pub fn role_grid() -> GridLayout {
    GridLayout::centered(4, 2, CARD_W, CARD_H, 40.0, 50.0, WIDTH, HEIGHT).offset_y(30.0)
}

pub fn role_mapping(variant: Variant) -> Diagram {
    let (title, heading, file_name) = match variant {
        Variant::Basic => (
            "Who Uses HVE-Core? Role → Collection → Workflow",
            "Who Uses HVE-Core?  Role → Collection → Workflow",
            "hve-core-role-mapping.svg",
        ),
        Variant::Enhanced => (
            "Eight Roles, One Framework",
            "Eight Roles, One Framework",
            "hve-core-role-mapping-enhanced.svg",
        ),
    };

    let mut svg = header(WIDTH, HEIGHT, title, variant);
    title_block(
        &mut svg,
        heading,
        "Each role maps to a collection with tailored agents, prompts, and workflows",
    );

    let grid = role_grid();
    for (idx, role) in ROLES.iter().enumerate() {
        let cell = grid.cell(idx);
        trace!("role card '{}' at ({}, {})", role.name, cell.x, cell.y);
        role_card(&mut svg, cell.x, cell.y, role);
    }

    Diagram::new(file_name, svg)
}

fn role_card(svg: &mut SvgBuilder, cx: f64, cy: f64, role: &Role) {
    let color = role.color;
    let mid = cx + CARD_W / 2.0;

    svg.add_rect(
        SvgRect::new(cx, cy, CARD_W, CARD_H)
            .with_rx(12.0)
            .with_fill(CARD_BG)
            .with_stroke(color, 2.0),
    );

    // Header band; the second rect squares off its lower corners
    svg.add_rect(SvgRect::new(cx, cy, CARD_W, HEADER_H).with_rx(12.0).with_fill(color));
    svg.add_rect(SvgRect::new(cx, cy + HEADER_H - 12.0, CARD_W, 12.0).with_fill(color));
    svg.add_text(text_label(mid, cy + 38.0, role.name, WHITE, 20.0));

    let badge_y = cy + HEADER_H + 30.0;
    let badge_w = badge_width(role.collection);
    let badge_x = cx + ((CARD_W - badge_w) / 2.0).floor();
    svg.add_rect(
        SvgRect::new(badge_x, badge_y, badge_w, 28.0)
            .with_rx(6.0)
            .with_fill(DARK_BG)
            .with_stroke(color, 1.5),
    );
    svg.add_text(text_label(
        badge_x + (badge_w / 2.0).floor(),
        badge_y + 19.0,
        role.collection,
        color,
        13.0,
    ));
    svg.add_text(text_label(mid, badge_y + 50.0, "Collection", MED_GRAY, 10.0));

    let workflow_y = badge_y + 75.0;
    svg.add_text(text_label(mid, workflow_y, role.workflow, LIGHT_GRAY, 15.0));
    svg.add_text(text_label(mid, workflow_y + 22.0, "Workflow Pattern", MED_GRAY, 10.0));

    let line_y = cy + CARD_H - 15.0;
    svg.add_line(
        SvgLine::new(cx + 20.0, line_y, cx + CARD_W - 20.0, line_y, color, 1.0).with_opacity(0.3),
    );
}

/// Collection badges grow 9px per character plus padding.
pub fn badge_width(collection: &str) -> f64 {
    (collection.chars().count() * 9 + 24) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagrams::layout::Bounds;
    use crate::images::svg::SvgElement;

    fn cards(svg: &SvgBuilder) -> Vec<Bounds> {
        svg.elements
            .iter()
            .filter_map(|e| match e {
                SvgElement::Rect(r) if r.width == CARD_W && r.height == CARD_H => {
                    Some(Bounds::new(r.x, r.y, r.width, r.height))
                },
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_eight_cards_without_overlap() {
        let diagram = role_mapping(Variant::Basic);
        let cards = cards(&diagram.svg);
        assert_eq!(cards.len(), 8);

        let mut xs: Vec<f64> = cards.iter().map(|c| c.x).collect();
        xs.sort_by(f64::total_cmp);
        xs.dedup();
        assert_eq!(xs.len(), 4);

        for (i, a) in cards.iter().enumerate() {
            for b in &cards[i + 1..] {
                assert!(!a.overlaps(b));
            }
        }
    }

    #[test]
    fn test_badge_width() {
        assert_eq!(badge_width("github"), 78.0);
        assert_eq!(badge_width("security-planning"), 177.0);
    }

    #[test]
    fn test_enhanced_title() {
        let out = role_mapping(Variant::Enhanced).to_svg();
        assert!(out.contains("<title>Eight Roles, One Framework</title>"));
        assert!(out.contains("9-Method Coaching"));
    }
}
