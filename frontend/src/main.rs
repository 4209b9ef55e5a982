mod api;
mod components;

use components::utils::render_error_message;
use components::{dictionary, header, help, results, theme_toggle, upload_section};
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_storage::{LocalStorage, Storage};
use shared::{Assessment, knowledge};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

const THRESHOLD_STORAGE_KEY: &str = "dermascan.threshold";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Scan,
    Dictionary,
    Help,
}

// Models
#[derive(Clone)]
pub struct FileData {
    pub file: GlooFile,
    pub preview_url: Option<ObjectUrl>,
}

// Yew msg components
pub enum Msg {
    // File operations
    FileAdded(GlooFile),
    PreviewReady(ObjectUrl),
    ClearSession,

    // Analysis operations
    Analyze,
    AssessmentReady(Assessment),

    // UI states
    SelectTab(Tab),
    SetThreshold(f32),
    SelectCondition(String),
    SetError(Option<String>),
    SetDragging(bool),
    ToggleTheme,
    OpenSpecialistSearch,

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

/// Per-session context: holds the selected image and the most recent
/// assessment so re-renders never rerun inference. Created empty, populated
/// after each analysis, cleared on reset or new upload.
pub struct Model {
    pub tab: Tab,
    pub file: Option<FileData>,
    pub assessment: Option<Assessment>,
    pub threshold_pct: f32,
    pub loading: bool,
    pub error: Option<String>,
    pub is_dragging: bool,
    pub theme: String,
    pub selected_condition: String,
    paste_listener: Option<EventListener>,
}

// Yew component implementation
impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let threshold_pct = LocalStorage::get(THRESHOLD_STORAGE_KEY)
            .unwrap_or(shared::DEFAULT_THRESHOLD_PCT);

        let mut model = Self {
            tab: Tab::Scan,
            file: None,
            assessment: None,
            threshold_pct,
            loading: false,
            error: None,
            is_dragging: false,
            theme: "light".to_string(),
            selected_condition: knowledge::condition_names()
                .first()
                .cloned()
                .unwrap_or_default(),
            paste_listener: None,
        };

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });
        model.paste_listener = Some(listener);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File operations
            Msg::FileAdded(file) => self.handle_file_added(ctx, file),
            Msg::PreviewReady(url) => self.handle_preview_ready(url),
            Msg::ClearSession => self.handle_clear_session(),

            // Analysis operations
            Msg::Analyze => self.handle_analyze(ctx),
            Msg::AssessmentReady(assessment) => self.handle_assessment_ready(assessment),

            // UI states
            Msg::SelectTab(tab) => {
                self.tab = tab;
                true
            }
            Msg::SetThreshold(value) => self.handle_set_threshold(value),
            Msg::SelectCondition(name) => {
                self.selected_condition = name;
                true
            }
            Msg::SetError(error) => {
                self.error = error;
                self.loading = false;
                true
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::ToggleTheme => self.handle_toggle_theme(),
            Msg::OpenSpecialistSearch => self.handle_open_specialist_search(),

            // Input events
            Msg::HandleDrop(event) => self.handle_drop(ctx, event),
            Msg::HandlePaste(event) => self.handle_paste(ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }
                { theme_toggle::render_theme_toggle(self, ctx) }
                { self.render_tabs(ctx) }

                <main class="main-content">
                {
                    match self.tab {
                        Tab::Scan => html! {
                            <>
                                { upload_section::render_upload_section(self, ctx) }
                                { render_error_message(self) }
                                { results::render_results(self) }
                            </>
                        },
                        Tab::Dictionary => dictionary::render_dictionary(self, ctx),
                        Tab::Help => help::render_help(ctx),
                    }
                }
                </main>

                <footer class="app-footer">
                    <p>{"DermaScan | Fullstack Rust WASM | Educational screening only"}</p>
                </footer>
            </div>
        }
    }
}

// Handler methods
impl Model {
    fn handle_file_added(&mut self, ctx: &Context<Self>, file: GlooFile) -> bool {
        // New upload starts a fresh session: old result and error are gone.
        self.assessment = None;
        self.error = None;
        self.loading = false;
        self.file = Some(FileData {
            file: file.clone(),
            preview_url: None,
        });

        let preview_url = ObjectUrl::from(file);
        ctx.link().send_message(Msg::PreviewReady(preview_url));
        true
    }

    fn handle_preview_ready(&mut self, url: ObjectUrl) -> bool {
        if let Some(file_data) = self.file.as_mut() {
            file_data.preview_url = Some(url);
            true
        } else {
            false
        }
    }

    fn handle_clear_session(&mut self) -> bool {
        self.file = None;
        self.assessment = None;
        self.error = None;
        self.loading = false;
        true
    }

    fn handle_analyze(&mut self, ctx: &Context<Self>) -> bool {
        if let Some(file_data) = &self.file {
            self.loading = true;
            self.error = None;
            api::send_analysis_request(
                ctx.link().clone(),
                file_data.file.clone(),
                self.threshold_pct,
            );
            return true;
        }

        ctx.link()
            .send_message(Msg::SetError(Some("No image selected for analysis.".into())));
        false
    }

    fn handle_assessment_ready(&mut self, assessment: Assessment) -> bool {
        self.assessment = Some(assessment);
        self.loading = false;
        true
    }

    fn handle_set_threshold(&mut self, value: f32) -> bool {
        self.threshold_pct = value.clamp(0.0, 100.0);
        LocalStorage::set(THRESHOLD_STORAGE_KEY, self.threshold_pct).ok();
        true
    }

    fn handle_toggle_theme(&mut self) -> bool {
        let body = web_sys::window().unwrap().document().unwrap().body().unwrap();

        if self.theme == "light" {
            self.theme = "dark".to_string();
            body.class_list().add_1("dark-mode").unwrap();
        } else {
            self.theme = "light".to_string();
            body.class_list().remove_1("dark-mode").unwrap();
        }

        true
    }

    fn handle_open_specialist_search(&mut self) -> bool {
        if let Some(window) = web_sys::window() {
            window
                .open_with_url_and_target(shared::SPECIALIST_SEARCH_URL, "_blank")
                .ok();
        }
        false
    }

    fn handle_drop(&mut self, ctx: &Context<Self>, event: DragEvent) -> bool {
        event.prevent_default();
        self.is_dragging = false;

        if let Some(data_transfer) = event.data_transfer() {
            if let Some(file_list) = data_transfer.files() {
                self.process_file_list(ctx, file_list);
            }
        }

        true
    }

    fn handle_paste(&mut self, ctx: &Context<Self>, event: ClipboardEvent) -> bool {
        if let Some(data_transfer) = event.clipboard_data() {
            if let Some(file_list) = data_transfer.files() {
                event.prevent_default();
                self.process_file_list(ctx, file_list);
                return true;
            }
        }
        false
    }

    // Helper methods
    fn process_file_list(&self, ctx: &Context<Self>, file_list: FileList) {
        let mut images = components::utils::extract_image_files(&file_list);

        if let Some(file) = images.pop() {
            ctx.link().send_message(Msg::FileAdded(file));
        } else {
            log::warn!("No supported image in dropped/pasted data");
            ctx.link().send_message(Msg::SetError(Some(
                "No supported image file found (PNG, JPG, JPEG).".into(),
            )));
        }
    }

    fn render_tabs(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let tab_button = |tab: Tab, icon: &str, label: &str| {
            let is_active = self.tab == tab;
            html! {
                <button
                    class={classes!("tab-btn", is_active.then_some("active"))}
                    onclick={link.callback(move |_| Msg::SelectTab(tab))}
                >
                    <i class={format!("fa-solid {icon}")}></i>{ format!(" {label}") }
                </button>
            }
        };

        html! {
            <nav class="tab-bar">
                { tab_button(Tab::Scan, "fa-magnifying-glass", "Lesion Scan") }
                { tab_button(Tab::Dictionary, "fa-book-medical", "Condition Dictionary") }
                { tab_button(Tab::Help, "fa-truck-medical", "Find Help") }
            </nav>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
