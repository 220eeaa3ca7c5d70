// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants for the invitation page.

## Organization

- **Palette**: Base colors (ivory, gold, sage, ink)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Layout**: Fixed section geometry used for scroll math
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_invite::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::INK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Paper tones
    pub const IVORY: Color = Color::from_rgb(0.992, 0.976, 0.949);
    pub const CREAM: Color = Color::from_rgb(0.965, 0.937, 0.894);
    pub const SAND: Color = Color::from_rgb(0.902, 0.859, 0.792);

    // Ink tones
    pub const INK: Color = Color::from_rgb(0.153, 0.141, 0.133);
    pub const INK_SOFT: Color = Color::from_rgb(0.353, 0.329, 0.306);
    pub const INK_MUTED: Color = Color::from_rgb(0.557, 0.525, 0.494);
    pub const NIGHT: Color = Color::from_rgb(0.106, 0.102, 0.110);
    pub const NIGHT_RAISED: Color = Color::from_rgb(0.161, 0.153, 0.165);

    // Accents
    pub const GOLD_300: Color = Color::from_rgb(0.894, 0.800, 0.588);
    pub const GOLD_500: Color = Color::from_rgb(0.769, 0.639, 0.353);
    pub const GOLD_700: Color = Color::from_rgb(0.588, 0.471, 0.220);
    pub const SAGE_500: Color = Color::from_rgb(0.522, 0.608, 0.510);
    pub const ROSE_300: Color = Color::from_rgb(0.910, 0.765, 0.757);
    pub const ROSE_500: Color = Color::from_rgb(0.788, 0.541, 0.537);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Dimmed page behind the lightbox and the gift modal.
    pub const BACKDROP: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Navbar once the page has scrolled.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Below this window width the navbar collapses into a menu toggle.
    pub const NAV_COLLAPSE_WIDTH: f32 = 768.0;

    pub const MODAL_WIDTH: f32 = 420.0;

    /// Envelope drawn on the intro screen.
    pub const ENVELOPE_WIDTH: f32 = 360.0;
    pub const ENVELOPE_HEIGHT: f32 = 240.0;
}

// ============================================================================
// Page Layout
// ============================================================================

pub mod layout {
    //! Every section is laid out with fixed heights so section and element
    //! positions are known without querying the renderer. Scroll targets,
    //! active-section highlighting and reveal tracking all derive from these.

    pub const NAVBAR_HEIGHT: f32 = 64.0;
    pub const MENU_ITEM_HEIGHT: f32 = 44.0;

    pub const HERO_HEIGHT: f32 = 640.0;

    /// Title block at the top of every section after the hero.
    pub const SECTION_HEADER_HEIGHT: f32 = 120.0;
    /// Blank space below the last element of a section.
    pub const SECTION_FOOTER_HEIGHT: f32 = 72.0;

    pub const TIMELINE_ITEM_HEIGHT: f32 = 150.0;

    pub const PERSON_CARD_WIDTH: f32 = 260.0;
    pub const PERSON_CARD_HEIGHT: f32 = 300.0;

    /// Polaroid card, frame included.
    pub const GALLERY_CARD_WIDTH: f32 = 240.0;
    pub const GALLERY_CARD_HEIGHT: f32 = 290.0;
    pub const GALLERY_PHOTO_HEIGHT: f32 = 220.0;
    /// Horizontal and vertical gap between cards, wide enough for jitter.
    pub const GALLERY_GAP: f32 = 40.0;

    pub const GIFTS_BODY_HEIGHT: f32 = 220.0;

    /// Horizontal page padding on each side.
    pub const PAGE_GUTTER: f32 = 32.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Couple names on the hero.
    pub const DISPLAY: f32 = 56.0;

    /// Section titles.
    pub const TITLE_LG: f32 = 34.0;

    /// Card headings, countdown digits.
    pub const TITLE_MD: f32 = 22.0;

    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Captions, countdown unit labels.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    const SOFT: Color = Color {
        a: 0.25,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SOFT,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Polaroid cards.
    pub const MD: Shadow = Shadow {
        color: SOFT,
        offset: Vector { x: 0.0, y: 6.0 },
        blur_radius: 12.0,
    };

    pub const LG: Shadow = Shadow {
        color: SOFT,
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    // The photo must fit inside its polaroid frame.
    assert!(layout::GALLERY_PHOTO_HEIGHT < layout::GALLERY_CARD_HEIGHT);
    assert!(layout::GALLERY_GAP > 0.0);
};
