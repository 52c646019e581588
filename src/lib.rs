pub mod traits;
pub mod config;
pub mod theme;
pub mod geometry;
pub mod layout;
pub mod caption;
pub mod rendering;
pub mod state;
pub mod view;
pub mod egui_host;

// Export host contracts
pub use traits::{
    FontMetrics, ImageHandle, ImageId, ImageLoader, Invalidator, PointerParent,
    Surface, TextBackend, UnlockListener, ELLIPSIS,
};

// Export configuration model
pub use config::{clamp_limit_progress, ResetSpeed, SlideConfig, TextGravity};

// Export geometry and layout
pub use geometry::{Geometry, IntRect};
pub use layout::{FrameLayout, TextAnchors};
pub use caption::{Caption, TextStyle};

// Export interaction state machine
pub use state::{Effects, InteractionPhase, InteractionState, PointerEvent, PointerKind};

// Export the control
pub use view::UnlockSlideView;
pub use rendering::frame::FrameReport;
pub use rendering::caption_renderer::CaptionPlacement;

// Export egui host support
pub use egui_host::{EguiInvalidator, EguiSurface, ImageRegistry, InterceptFlag};

// Export palette support
pub use theme::{SlideTheme, SlideColors, hex_to_color32};
