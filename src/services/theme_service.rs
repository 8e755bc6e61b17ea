// ============================================================================
// THEME SERVICE - Preset de tema en el <html>
// ============================================================================

use std::str::FromStr;
use crate::dom::document;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreset {
    #[default]
    Nora,
    Aura,
    Lara,
}

impl ThemePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreset::Nora => "nora",
            ThemePreset::Aura => "aura",
            ThemePreset::Lara => "lara",
        }
    }

    pub fn css_class(&self) -> String {
        format!("theme-{}", self.as_str())
    }

    /// Preset configurado; si el valor no es válido se usa Nora
    pub fn from_config(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            log::warn!("⚠️ THEME_PRESET desconocido '{}', usando nora", value);
            ThemePreset::default()
        })
    }
}

impl FromStr for ThemePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nora" => Ok(ThemePreset::Nora),
            "aura" => Ok(ThemePreset::Aura),
            "lara" => Ok(ThemePreset::Lara),
            other => Err(format!("Tema desconocido: {}", other)),
        }
    }
}

/// Aplicar el preset al elemento raíz del documento
pub fn install_theme(preset: ThemePreset) -> Result<(), AppError> {
    let root = document()
        .and_then(|doc| doc.document_element())
        .ok_or_else(|| AppError::Dom("No document element".to_string()))?;

    root.set_attribute("data-theme", preset.as_str())
        .map_err(AppError::dom)?;
    root.class_list()
        .add_1(&preset.css_class())
        .map_err(AppError::dom)?;

    log::info!("🎨 Tema instalado: {}", preset.as_str());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_presets() {
        assert_eq!("Nora".parse::<ThemePreset>(), Ok(ThemePreset::Nora));
        assert_eq!(" aura ".parse::<ThemePreset>(), Ok(ThemePreset::Aura));
        assert!("material".parse::<ThemePreset>().is_err());
        assert_eq!(ThemePreset::from_config("material"), ThemePreset::Nora);
        assert_eq!(ThemePreset::Lara.css_class(), "theme-lara");
    }
}
