#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AssetKind {
    Image,
    Page,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Asset {
    pub url: &'static str,
    pub kind: AssetKind,
    pub priority: Priority,
}

const fn image(url: &'static str, priority: Priority) -> Asset {
    Asset {
        url,
        kind: AssetKind::Image,
        priority,
    }
}

const fn page(url: &'static str, priority: Priority) -> Asset {
    Asset {
        url,
        kind: AssetKind::Page,
        priority,
    }
}

pub const MANIFEST: &[Asset] = &[
    image("assets/images/logo.svg", Priority::High),
    image("assets/images/hero-device.webp", Priority::High),
    image("assets/images/hero-background.webp", Priority::High),
    image("assets/images/service-web-design.webp", Priority::Medium),
    image("assets/images/service-seo.webp", Priority::Medium),
    image("assets/images/service-branding.webp", Priority::Medium),
    image("assets/images/portfolio-1.webp", Priority::Low),
    image("assets/images/portfolio-2.webp", Priority::Low),
    image("assets/images/portfolio-3.webp", Priority::Low),
    page("services.html", Priority::Medium),
    page("portfolio.html", Priority::Low),
    page("horizon-labs.html", Priority::Low),
    page("contact.html", Priority::Low),
];

/// Manifest entries in request order: high before medium before low, keeping
/// listing order within a tier.
pub fn request_order(manifest: &[Asset]) -> Vec<Asset> {
    let mut ordered = manifest.to_vec();
    ordered.sort_by_key(|asset| asset.priority);
    ordered
}
