use egui::CursorIcon;

/// The active canvas tool. Right-drag always erases and middle-drag always
/// pans regardless of the selected tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    Select,
    #[default]
    Paint,
    Erase,
    Pan,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Select, Tool::Paint, Tool::Erase, Tool::Pan];

    pub fn label(self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Paint => "Paint",
            Tool::Erase => "Erase",
            Tool::Pan => "Pan",
        }
    }

    pub fn cursor(self) -> CursorIcon {
        match self {
            Tool::Select => CursorIcon::Default,
            Tool::Paint => CursorIcon::Crosshair,
            Tool::Erase => CursorIcon::Crosshair,
            Tool::Pan => CursorIcon::Grab,
        }
    }
}
