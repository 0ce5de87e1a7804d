use serde::{Deserialize, Serialize};

/// Lighting constants for one material preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialParams {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub shininess: f32,
}

/// Named physical material presets.
///
/// A closed enum instead of the classic integer-indexed constant table:
/// every variant resolves to valid constants, so there is no out-of-range
/// index and no runtime check to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Emerald,
    Jade,
    Obsidian,
    Pearl,
    Ruby,
    Turquoise,
    Brass,
    Bronze,
    Chrome,
    Copper,
    Gold,
    Silver,
    BlackPlastic,
    CyanPlastic,
    GreenPlastic,
    RedPlastic,
    WhitePlastic,
    YellowPlastic,
    BlackRubber,
    CyanRubber,
    GreenRubber,
    RedRubber,
    WhiteRubber,
    YellowRubber,
}

const fn preset(
    ambient: [f32; 3],
    diffuse: [f32; 3],
    specular: [f32; 3],
    shininess: f32,
) -> MaterialParams {
    MaterialParams {
        ambient: [ambient[0], ambient[1], ambient[2], 1.0],
        diffuse: [diffuse[0], diffuse[1], diffuse[2], 1.0],
        specular: [specular[0], specular[1], specular[2], 1.0],
        shininess,
    }
}

impl Material {
    /// Every preset, in table order.
    pub const ALL: [Material; 24] = [
        Material::Emerald,
        Material::Jade,
        Material::Obsidian,
        Material::Pearl,
        Material::Ruby,
        Material::Turquoise,
        Material::Brass,
        Material::Bronze,
        Material::Chrome,
        Material::Copper,
        Material::Gold,
        Material::Silver,
        Material::BlackPlastic,
        Material::CyanPlastic,
        Material::GreenPlastic,
        Material::RedPlastic,
        Material::WhitePlastic,
        Material::YellowPlastic,
        Material::BlackRubber,
        Material::CyanRubber,
        Material::GreenRubber,
        Material::RedRubber,
        Material::WhiteRubber,
        Material::YellowRubber,
    ];

    /// The lighting constants for this preset.
    ///
    /// Shininess values follow the usual fraction-of-128 convention of
    /// the published tables.
    pub const fn params(self) -> MaterialParams {
        match self {
            Material::Emerald => preset(
                [0.0215, 0.1745, 0.0215],
                [0.07568, 0.61424, 0.07568],
                [0.633, 0.727811, 0.633],
                0.6 * 128.0,
            ),
            Material::Jade => preset(
                [0.135, 0.2225, 0.1575],
                [0.54, 0.89, 0.63],
                [0.316228, 0.316228, 0.316228],
                0.1 * 128.0,
            ),
            Material::Obsidian => preset(
                [0.05375, 0.05, 0.06625],
                [0.18275, 0.17, 0.22525],
                [0.332741, 0.328634, 0.346435],
                0.3 * 128.0,
            ),
            Material::Pearl => preset(
                [0.25, 0.20725, 0.20725],
                [1.0, 0.829, 0.829],
                [0.296648, 0.296648, 0.296648],
                0.088 * 128.0,
            ),
            Material::Ruby => preset(
                [0.1745, 0.01175, 0.01175],
                [0.61424, 0.04136, 0.04136],
                [0.727811, 0.626959, 0.626959],
                0.6 * 128.0,
            ),
            Material::Turquoise => preset(
                [0.1, 0.18725, 0.1745],
                [0.396, 0.74151, 0.69102],
                [0.297254, 0.30829, 0.306678],
                0.1 * 128.0,
            ),
            Material::Brass => preset(
                [0.329412, 0.223529, 0.027451],
                [0.780392, 0.568627, 0.113725],
                [0.992157, 0.941176, 0.807843],
                0.21794872 * 128.0,
            ),
            Material::Bronze => preset(
                [0.2125, 0.1275, 0.054],
                [0.714, 0.4284, 0.18144],
                [0.393548, 0.271906, 0.166721],
                0.2 * 128.0,
            ),
            Material::Chrome => preset(
                [0.25, 0.25, 0.25],
                [0.4, 0.4, 0.4],
                [0.774597, 0.774597, 0.774597],
                0.6 * 128.0,
            ),
            Material::Copper => preset(
                [0.19125, 0.0735, 0.0225],
                [0.7038, 0.27048, 0.0828],
                [0.256777, 0.137622, 0.086014],
                0.1 * 128.0,
            ),
            Material::Gold => preset(
                [0.24725, 0.1995, 0.0745],
                [0.75164, 0.60648, 0.22648],
                [0.628281, 0.555802, 0.366065],
                0.4 * 128.0,
            ),
            Material::Silver => preset(
                [0.19225, 0.19225, 0.19225],
                [0.50754, 0.50754, 0.50754],
                [0.508273, 0.508273, 0.508273],
                0.4 * 128.0,
            ),
            Material::BlackPlastic => preset(
                [0.0, 0.0, 0.0],
                [0.01, 0.01, 0.01],
                [0.5, 0.5, 0.5],
                0.25 * 128.0,
            ),
            Material::CyanPlastic => preset(
                [0.0, 0.1, 0.06],
                [0.0, 0.50980392, 0.50980392],
                [0.50196078, 0.50196078, 0.50196078],
                0.25 * 128.0,
            ),
            Material::GreenPlastic => preset(
                [0.0, 0.0, 0.0],
                [0.1, 0.35, 0.1],
                [0.45, 0.55, 0.45],
                0.25 * 128.0,
            ),
            Material::RedPlastic => preset(
                [0.0, 0.0, 0.0],
                [0.5, 0.0, 0.0],
                [0.7, 0.6, 0.6],
                0.25 * 128.0,
            ),
            Material::WhitePlastic => preset(
                [0.0, 0.0, 0.0],
                [0.55, 0.55, 0.55],
                [0.7, 0.7, 0.7],
                0.25 * 128.0,
            ),
            Material::YellowPlastic => preset(
                [0.0, 0.0, 0.0],
                [0.5, 0.5, 0.0],
                [0.6, 0.6, 0.5],
                0.25 * 128.0,
            ),
            Material::BlackRubber => preset(
                [0.02, 0.02, 0.02],
                [0.01, 0.01, 0.01],
                [0.4, 0.4, 0.4],
                0.078125 * 128.0,
            ),
            Material::CyanRubber => preset(
                [0.0, 0.05, 0.05],
                [0.4, 0.5, 0.5],
                [0.04, 0.7, 0.7],
                0.078125 * 128.0,
            ),
            Material::GreenRubber => preset(
                [0.0, 0.05, 0.0],
                [0.4, 0.5, 0.4],
                [0.04, 0.7, 0.04],
                0.078125 * 128.0,
            ),
            Material::RedRubber => preset(
                [0.05, 0.0, 0.0],
                [0.5, 0.4, 0.4],
                [0.7, 0.04, 0.04],
                0.078125 * 128.0,
            ),
            Material::WhiteRubber => preset(
                [0.05, 0.05, 0.05],
                [0.5, 0.5, 0.5],
                [0.7, 0.7, 0.7],
                0.078125 * 128.0,
            ),
            Material::YellowRubber => preset(
                [0.05, 0.05, 0.0],
                [0.5, 0.5, 0.4],
                [0.7, 0.7, 0.04],
                0.078125 * 128.0,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_has_sane_constants() {
        for material in Material::ALL {
            let params = material.params();
            for channel in params
                .ambient
                .iter()
                .chain(params.diffuse.iter())
                .chain(params.specular.iter())
            {
                assert!((0.0..=1.0).contains(channel), "{material:?}: {channel}");
            }
            assert!(params.shininess > 0.0 && params.shininess <= 128.0);
        }
    }

    #[test]
    fn chrome_matches_the_published_table() {
        let chrome = Material::Chrome.params();
        assert_eq!(chrome.ambient, [0.25, 0.25, 0.25, 1.0]);
        assert_eq!(chrome.diffuse, [0.4, 0.4, 0.4, 1.0]);
        assert_eq!(chrome.specular, [0.774597, 0.774597, 0.774597, 1.0]);
        assert_eq!(chrome.shininess, 0.6 * 128.0);
    }

    #[test]
    fn rubber_presets_are_dull() {
        assert_eq!(Material::RedRubber.params().shininess, 10.0);
    }
}
