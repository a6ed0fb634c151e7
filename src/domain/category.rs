//! Closed category enumeration used for the first filtering level.
//!
//! Display metadata (label, key, description) is resolved by matching on the
//! variant, so adding a category is a compile-checked change in one place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level classification of a catalog entry.
///
/// [`Category::All`] is the "no filter" sentinel and never a real entry's
/// category. [`Category::Unknown`] stands for a filter token that did not
/// parse; it matches no entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    All,
    Web,
    Technical,
    Design,
    Management,
    Education,
    Demo,
    VirtualAssistance,
    ContentCreation,
    ProfessionalDevelopment,
    Commercial,
    Industrial,
    #[serde(other)]
    Unknown,
}

impl Category {
    /// Real categories in filter bar order.
    pub const FILTERABLE: [Self; 11] = [
        Self::Web,
        Self::Technical,
        Self::Design,
        Self::Management,
        Self::Education,
        Self::Demo,
        Self::VirtualAssistance,
        Self::ContentCreation,
        Self::ProfessionalDevelopment,
        Self::Commercial,
        Self::Industrial,
    ];

    /// Human-readable label for filter buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Web => "Web Development",
            Self::Technical => "Technical Design",
            Self::Design => "Design",
            Self::Management => "Project Management",
            Self::Education => "Education",
            Self::Demo => "Demo",
            Self::VirtualAssistance => "Virtual Assistant Services",
            Self::ContentCreation => "Content Creation",
            Self::ProfessionalDevelopment => "Professional Development",
            Self::Commercial => "Commercial",
            Self::Industrial => "Industrial",
            Self::Unknown => "Unknown",
        }
    }

    /// Short stable key, used in URLs and shell commands.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Web => "web",
            Self::Technical => "tech",
            Self::Design => "design",
            Self::Management => "pm",
            Self::Education => "education",
            Self::Demo => "demo",
            Self::VirtualAssistance => "va",
            Self::ContentCreation => "content",
            Self::ProfessionalDevelopment => "prof",
            Self::Commercial => "commercial",
            Self::Industrial => "industrial",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::All => "View all projects across different domains",
            Self::Web => "Web applications and websites",
            Self::Technical => "Technical and engineering design projects",
            Self::Design => "Graphic and visual design work",
            Self::Management => "Project management and coordination",
            Self::Education => "Courses, training and certifications",
            Self::Demo => "Demos and prototypes",
            Self::VirtualAssistance => "Virtual assistant and automation services",
            Self::ContentCreation => "Content creation and design",
            Self::ProfessionalDevelopment => "Professional development and training",
            Self::Commercial => "Commercial and business solutions",
            Self::Industrial => "Industrial design and manufacturing",
            Self::Unknown => "",
        }
    }

    /// Parses a filter token.
    ///
    /// Accepts the short key, the serialized name, or the label, ignoring case
    /// and surrounding whitespace. Anything else becomes
    /// [`Category::Unknown`], which filters to an empty result.
    ///
    /// ```
    /// use folio_catalog::Category;
    ///
    /// assert_eq!(Category::from_key("tech"), Category::Technical);
    /// assert_eq!(Category::from_key("Web Development"), Category::Web);
    /// assert_eq!(Category::from_key("virtual_assistance"), Category::VirtualAssistance);
    /// assert_eq!(Category::from_key("pottery"), Category::Unknown);
    /// ```
    #[must_use]
    pub fn from_key(token: &str) -> Self {
        let token = token.trim();
        std::iter::once(Self::All)
            .chain(Self::FILTERABLE)
            .find(|category| {
                token.eq_ignore_ascii_case(category.key())
                    || token.eq_ignore_ascii_case(category.label())
                    || token.eq_ignore_ascii_case(category.serde_name())
            })
            .unwrap_or(Self::Unknown)
    }

    /// Whether this value can be a real entry's category.
    #[must_use]
    pub const fn is_real(self) -> bool {
        !matches!(self, Self::All | Self::Unknown)
    }

    const fn serde_name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Web => "web",
            Self::Technical => "technical",
            Self::Design => "design",
            Self::Management => "management",
            Self::Education => "education",
            Self::Demo => "demo",
            Self::VirtualAssistance => "virtual_assistance",
            Self::ContentCreation => "content_creation",
            Self::ProfessionalDevelopment => "professional_development",
            Self::Commercial => "commercial",
            Self::Industrial => "industrial",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
