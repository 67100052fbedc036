mod editor_panel;
mod menu_bar;
mod query_sidebar;
mod results_panel;
mod workbench_window;

pub use editor_panel::EditorPanel;
pub use menu_bar::MenuBar;
pub use query_sidebar::QuerySidebar;
pub use results_panel::ResultsPanel;
pub use workbench_window::WorkbenchWindow;

#[derive(Default)]
pub struct UIComponents {
    pub menu_bar: MenuBar,
    pub query_sidebar: QuerySidebar,
    pub workbench: WorkbenchWindow,
}
