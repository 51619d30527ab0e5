//! Builders for the three editor regions around the stage.
//!
//! Regions are laid out like a border layout: the toolbar docks at the
//! top and takes the height of its tallest item, the sidebar docks to the
//! right at a fixed width, and the slide switcher docks at the bottom at
//! a fixed height. Each builder runs once at startup (or when an
//! experiment is opened); rendering happens every frame.

use log::debug;

use crate::core::{EditorContext, Stage};
use crate::widgets::sidebar::{PreviewPanel, SIDEBAR_WIDTH, SectionedPanel, Sidebar};
use crate::widgets::switcher::SlideStrip;
use crate::widgets::toolbar::{
    TOOLBAR_SEPARATOR_SIZE, Toolbar, ToolbarAction, ToolbarButton, ToolbarItem,
};

/// Create and populate the toolbar.
///
/// Sections: add elements to the current slide, then experiment-level
/// actions. Video, sound and container buttons are disabled until those
/// element kinds exist.
pub fn build_toolbar() -> Toolbar {
    let button = |action: ToolbarAction| {
        ToolbarItem::Button(ToolbarButton {
            action,
            enabled: action.is_implemented(),
        })
    };

    let items = vec![
        button(ToolbarAction::AddImage),
        button(ToolbarAction::AddVideo),
        button(ToolbarAction::AddSound),
        button(ToolbarAction::AddText),
        button(ToolbarAction::AddContainer),
        ToolbarItem::Separator(TOOLBAR_SEPARATOR_SIZE),
        button(ToolbarAction::Export),
        button(ToolbarAction::CreateList),
        ToolbarItem::Separator(TOOLBAR_SEPARATOR_SIZE),
    ];

    Toolbar {
        items,
        floatable: false,
        beveled: true,
    }
}

/// Create the sidebar and point the selection at the current slide.
pub fn build_sidebar(ctx: &mut EditorContext, stage: &Stage) -> Sidebar {
    ctx.selection.select_slide(stage.current_slide().uuid);
    debug!("Sidebar built, selection: {:?}", ctx.selection.current());
    Sidebar {
        width: SIDEBAR_WIDTH,
        preview: PreviewPanel::default(),
        properties: SectionedPanel::default(),
    }
}

/// Create the slide switcher strip for the stage's slides.
pub fn build_slide_switcher(stage: &Stage) -> SlideStrip {
    SlideStrip::from_slides(stage.slides())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Selection;
    use crate::entities::Experiment;
    use crate::widgets::switcher::StripItem;
    use crate::widgets::toolbar::TOOLBAR_HEIGHT;

    #[test]
    fn test_toolbar_order() {
        let toolbar = build_toolbar();
        let order: Vec<Option<ToolbarAction>> = toolbar
            .items
            .iter()
            .map(|item| match item {
                ToolbarItem::Button(b) => Some(b.action),
                ToolbarItem::Separator(_) => None,
            })
            .collect();
        assert_eq!(
            order,
            vec![
                Some(ToolbarAction::AddImage),
                Some(ToolbarAction::AddVideo),
                Some(ToolbarAction::AddSound),
                Some(ToolbarAction::AddText),
                Some(ToolbarAction::AddContainer),
                None,
                Some(ToolbarAction::Export),
                Some(ToolbarAction::CreateList),
                None,
            ]
        );
        assert!(!toolbar.floatable);
        assert!(toolbar.beveled);
    }

    #[test]
    fn test_unimplemented_buttons_disabled_every_build() {
        for _ in 0..3 {
            let toolbar = build_toolbar();
            for action in [
                ToolbarAction::AddVideo,
                ToolbarAction::AddSound,
                ToolbarAction::AddContainer,
            ] {
                assert_eq!(toolbar.button(action).map(|b| b.enabled), Some(false));
            }
            let enabled = toolbar.buttons().filter(|b| b.enabled).count();
            assert_eq!(enabled, 4);
        }
    }

    #[test]
    fn test_toolbar_height_is_tallest_item() {
        let toolbar = build_toolbar();
        assert_eq!(toolbar.preferred_height(), TOOLBAR_HEIGHT);

        let buttons_only = Toolbar {
            items: toolbar
                .items
                .iter()
                .filter(|i| matches!(i, ToolbarItem::Button(_)))
                .cloned()
                .collect(),
            ..toolbar
        };
        assert!(buttons_only.preferred_height() < TOOLBAR_HEIGHT);
    }

    #[test]
    fn test_sidebar_fixed_width_and_selection() {
        let mut ctx = EditorContext::new();
        let stage = Stage::new(Experiment::new("x"));
        let sidebar = build_sidebar(&mut ctx, &stage);
        assert_eq!(sidebar.width, 300.0);
        assert_eq!(
            ctx.selection.current(),
            Selection::Slide(stage.current_slide().uuid)
        );
    }

    #[test]
    fn test_switcher_mirrors_slides() {
        let mut stage = Stage::new(Experiment::new("x"));
        stage.add_blank_slide();
        let strip = build_slide_switcher(&stage);
        assert_eq!(strip.len(), 2);
        assert!(matches!(strip.items().last(), Some(StripItem::AddSlide)));
    }
}
