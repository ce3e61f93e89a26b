/// Режим отбора по признаку архивности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArchivedMode {
    #[default]
    NotArchived,
    Archived,
    All,
}

impl ArchivedMode {
    /// Значение опции в выпадающем списке
    pub fn code(&self) -> &'static str {
        match self {
            ArchivedMode::NotArchived => "false",
            ArchivedMode::Archived => "true",
            ArchivedMode::All => "all",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ArchivedMode::NotArchived => "Not Archived",
            ArchivedMode::Archived => "Archived",
            ArchivedMode::All => "All",
        }
    }

    /// Порядок опций как в UI: не архивные, все, архивные
    pub fn all() -> Vec<ArchivedMode> {
        vec![ArchivedMode::NotArchived, ArchivedMode::All, ArchivedMode::Archived]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "false" => Some(ArchivedMode::NotArchived),
            "true" => Some(ArchivedMode::Archived),
            "all" => Some(ArchivedMode::All),
            _ => None,
        }
    }

    /// Пропускает ли режим проект с данным флагом `archived`
    pub fn admits(&self, archived: bool) -> bool {
        match self {
            ArchivedMode::NotArchived => !archived,
            ArchivedMode::Archived => archived,
            ArchivedMode::All => true,
        }
    }
}
