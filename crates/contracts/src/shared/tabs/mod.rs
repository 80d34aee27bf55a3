//! Tab management for app-details views
//!
//! Содержит:
//! - `tab` - модель таба и правила идентификаторов
//! - `config` - настройки полосы табов
//! - `registry` - наблюдаемое хранилище открытых табов (единственный источник правды)
//! - `layout` - разбиение на fixed/dynamic и расчёт переполнения

pub mod config;
pub mod layout;
pub mod registry;
pub mod tab;

pub use config::{TabsConfig, DEFAULT_CONFIG};
pub use layout::{
    dynamic_container_max_width, dynamic_container_style, StripMetrics, TabsData,
    FIXED_CONTAINER_STYLE, SECTION_STYLE, TABS_LIST_STYLE,
};
pub use registry::{AddTabOutcome, SubscriptionId, TabRegistry};
pub use tab::{normalize_identifier, resource_display_name, resource_identifier, Tab, TooltipLines};
