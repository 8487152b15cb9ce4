use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};
use bevy_egui::EguiContexts;

use super::components::Selected;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnotationTool {
    #[default]
    Select,
    Line,
    Circle,
    Draw,
    Text,
}

impl AnnotationTool {
    pub fn display_name(&self) -> &'static str {
        match self {
            AnnotationTool::Select => "Select (V)",
            AnnotationTool::Line => "Line (L)",
            AnnotationTool::Circle => "Circle (C)",
            AnnotationTool::Draw => "Draw (D)",
            AnnotationTool::Text => "Text (T)",
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            AnnotationTool::Select => CursorIcon::System(SystemCursorIcon::Default),
            AnnotationTool::Line => CursorIcon::System(SystemCursorIcon::Crosshair),
            AnnotationTool::Circle => CursorIcon::System(SystemCursorIcon::Crosshair),
            AnnotationTool::Draw => CursorIcon::System(SystemCursorIcon::Crosshair),
            AnnotationTool::Text => CursorIcon::System(SystemCursorIcon::Text),
        }
    }

    pub fn all() -> &'static [AnnotationTool] {
        &[
            AnnotationTool::Select,
            AnnotationTool::Line,
            AnnotationTool::Circle,
            AnnotationTool::Draw,
            AnnotationTool::Text,
        ]
    }
}

#[derive(Resource, Default)]
pub struct CurrentTool {
    pub tool: AnnotationTool,
}

pub fn handle_tool_shortcuts(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut current_tool: ResMut<CurrentTool>,
    selected_query: Query<Entity, With<Selected>>,
    mut contexts: EguiContexts,
) {
    // Don't change tools if typing in a text field
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let new_tool = if keyboard.just_pressed(KeyCode::KeyV) {
        Some(AnnotationTool::Select)
    } else if keyboard.just_pressed(KeyCode::KeyL) {
        Some(AnnotationTool::Line)
    } else if keyboard.just_pressed(KeyCode::KeyC) {
        Some(AnnotationTool::Circle)
    } else if keyboard.just_pressed(KeyCode::KeyD) {
        Some(AnnotationTool::Draw)
    } else if keyboard.just_pressed(KeyCode::KeyT) {
        Some(AnnotationTool::Text)
    } else {
        None
    };

    if let Some(tool) = new_tool {
        // Clear selection when switching tools
        if tool != current_tool.tool {
            for entity in selected_query.iter() {
                commands.entity(entity).remove::<Selected>();
            }
        }
        current_tool.tool = tool;
    }
}

pub fn update_cursor_icon(
    current_tool: Res<CurrentTool>,
    window_query: Query<Entity, With<PrimaryWindow>>,
    cursor_override: Res<crate::overlay::CursorOverride>,
    mut commands: Commands,
    mut contexts: EguiContexts,
) {
    // A toolbar drag holds the window cursor; stay out of its way
    if cursor_override.is_active() {
        return;
    }

    let Ok(entity) = window_query.single() else {
        return;
    };

    // Use default cursor over UI, tool cursor over the chart
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.is_pointer_over_area()
    {
        commands
            .entity(entity)
            .insert(CursorIcon::System(SystemCursorIcon::Default));
        return;
    }

    commands.entity(entity).insert(current_tool.tool.cursor_icon());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_contain_shortcuts() {
        for tool in AnnotationTool::all() {
            let name = tool.display_name();
            assert!(name.contains('('), "Display name should contain shortcut: {}", name);
            assert!(name.contains(')'), "Display name should contain shortcut: {}", name);
        }
    }

    #[test]
    fn test_all_returns_all_tools() {
        let all = AnnotationTool::all();
        assert_eq!(all.len(), 5);
        assert!(all.contains(&AnnotationTool::Select));
        assert!(all.contains(&AnnotationTool::Line));
        assert!(all.contains(&AnnotationTool::Circle));
        assert!(all.contains(&AnnotationTool::Draw));
        assert!(all.contains(&AnnotationTool::Text));
    }

    #[test]
    fn test_default_tool_is_select() {
        assert_eq!(AnnotationTool::default(), AnnotationTool::Select);
    }

    #[test]
    fn test_drawing_tools_use_crosshair() {
        for tool in [
            AnnotationTool::Line,
            AnnotationTool::Circle,
            AnnotationTool::Draw,
        ] {
            assert_eq!(
                tool.cursor_icon(),
                CursorIcon::System(SystemCursorIcon::Crosshair)
            );
        }
    }
}
