#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleFocus,
    FocusPicker,
    ToggleHelp,
    Resize,

    // Hex field
    InputChar(char),
    Backspace,
    ClearInput,

    // Visual picker
    NextChannel,
    PrevChannel,
    Nudge(i32),

    Generate,

    // Palette browsing
    PaletteUp,
    PaletteDown,
    GoTop,
    GoBottom,
    SwatchLeft,
    SwatchRight,

    // Side effects
    CopyBaseColor,
    CopySelectedColor,
    ExportSelected,
}
