/// The four canvas tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Brush,
    Eraser,
    Eyedropper,
    Fill,
}

impl Tool {
    /// All tools in toolbar order
    pub const ALL: [Tool; 4] = [Tool::Brush, Tool::Eraser, Tool::Eyedropper, Tool::Fill];

    /// Return the name of the tool
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
            Tool::Eyedropper => "Eyedropper",
            Tool::Fill => "Fill",
        }
    }

    /// Short label drawn on the toolbar button
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Brush => "B",
            Tool::Eraser => "E",
            Tool::Eyedropper => "I",
            Tool::Fill => "F",
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
