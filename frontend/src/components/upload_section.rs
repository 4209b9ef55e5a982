use crate::{Model, Msg};
use super::utils::{debounce, extract_image_files};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="upload-section">
            <h2>{"1. Specimen Acquisition"}</h2>
            { render_file_input_area(model, ctx) }
            { render_threshold_slider(model, ctx) }
            { render_preview_area(model, ctx) }
        </div>
    }
}

fn trigger_input(element_id: &'static str) -> Callback<()> {
    Callback::from(move |_| {
        if let Some(input) = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id(element_id)
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    })
}

fn render_file_input_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = input.files();
        let mut images = files.as_ref().map(extract_image_files).unwrap_or_default();

        input.set_value("");

        if let Some(file) = images.pop() {
            Msg::FileAdded(file)
        } else {
            Msg::SetError(Some("No valid image file selected (PNG, JPG, JPEG).".into()))
        }
    });
    let handle_capture = handle_change.clone();

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = trigger_input("file-input");
    let trigger_camera_input = trigger_input("camera-input");

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept=".png,.jpg,.jpeg"
                style="display: none;"
                onchange={handle_change}
            />
            <input
                type="file"
                id="camera-input"
                accept="image/*"
                capture="environment"
                style="display: none;"
                onchange={handle_capture}
            />

            <div class="source-buttons">
                <button
                    id="upload-button"
                    class="analyze-btn"
                    onclick={debounce(300, {
                        let trigger_file_input = trigger_file_input.clone();
                        move || trigger_file_input.emit(())
                    })}
                >
                    <i class="fa-solid fa-upload"></i> {" Upload Image"}
                </button>
                <button
                    id="camera-button"
                    class="analyze-btn"
                    onclick={debounce(300, {
                        let trigger_camera_input = trigger_camera_input.clone();
                        move || trigger_camera_input.emit(())
                    })}
                >
                    <i class="fa-solid fa-camera"></i> {" Live Camera Capture"}
                </button>
            </div>

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Drag & drop a dermatoscopic image here, paste, or click"}</p>
                    <p class="file-types">{"Supported formats: PNG, JPG, JPEG"}</p>
                </div>
            </div>
        </>
    }
}

fn render_threshold_slider(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        match input.value().parse::<f32>() {
            Ok(value) => Msg::SetThreshold(value),
            Err(_) => Msg::SetError(Some("Invalid threshold value.".into())),
        }
    });

    html! {
        <div class="threshold-control">
            <label for="threshold-slider">
                { format!("Sensitivity Threshold: {:.0}%", model.threshold_pct) }
            </label>
            <input
                type="range"
                id="threshold-slider"
                min="0"
                max="100"
                step="1"
                value={format!("{:.0}", model.threshold_pct)}
                oninput={oninput}
            />
            <p class="threshold-hint">
                {"Minimum confidence required to display a diagnostic report."}
            </p>
        </div>
    }
}

fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(file_data) = &model.file else {
        return html! {};
    };

    let link = ctx.link().clone();

    html! {
        <div id="preview-container">
            {
                if let Some(url) = &file_data.preview_url {
                    html! {
                        <img id="image-preview"
                            src={url.to_string()}
                            alt="Target lesion"
                            style="max-width:100%; max-height: 400px; object-fit: contain; margin-bottom: 10px;" />
                    }
                } else {
                    html! {
                        <div class="preview-placeholder">
                            <i class="fa-solid fa-spinner fa-spin"></i>
                            <p>{"Loading preview..."}</p>
                        </div>
                    }
                }
            }
            <p class="preview-caption">{ file_data.file.name() }</p>
            <div class="button-container">
                <button
                    class="analyze-btn danger"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.callback(|_| Msg::ClearSession).emit(())
                    })}
                >
                    <i class="fa-solid fa-trash"></i>{" Clear"}
                </button>
                <button
                    class="analyze-btn primary"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.callback(|_| Msg::Analyze).emit(())
                    })}
                    disabled={model.loading}
                >
                    {
                        if model.loading {
                            html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                        } else {
                            html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Initiate Analysis"}</> }
                        }
                    }
                </button>
            </div>
        </div>
    }
}
