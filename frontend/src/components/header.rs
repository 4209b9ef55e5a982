use yew::prelude::*;

/// Renders the application header with the clinical disclaimer
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-stethoscope"></i> {" DermaScan"}</h1>
            <p class="subtitle">{"AI-assisted skin lesion screening"}</p>
            <div class="disclaimer">
                <strong>{"CLINICAL DISCLAIMER: "}</strong>
                {"This tool screens for potential skin pathologies for educational \
                  purposes only. It does NOT replace a professional biopsy or a \
                  diagnosis by a certified dermatologist."}
            </div>
            <p class="privacy-note">
                <i class="fa-solid fa-lock"></i>
                {" Privacy: images are processed in memory and never stored."}
            </p>
        </header>
    }
}
