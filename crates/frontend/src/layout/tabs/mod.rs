//! Tab strip of the app-details views
//!
//! Содержит:
//! - `store` - реактивная обёртка над `TabRegistry` (один экземпляр на view)
//! - `dynamic_tabs` - полоса табов с переполнением в выпадающий список
//! - `tab` - отдельный таб (ссылка, кнопка закрытия, подсказка)
//! - `more_tabs` - выпадающий список для табов, которые не поместились
//! - `tooltip` - подсказка с полным заголовком таба
//! - `measure` - измерение ширины контейнеров

pub mod dynamic_tabs;
pub mod measure;
pub mod more_tabs;
pub mod store;
pub mod tab;
pub mod tooltip;

pub use dynamic_tabs::DynamicTabs;
pub use store::{provide_tabs_store, use_tabs_store, TabsStore};
