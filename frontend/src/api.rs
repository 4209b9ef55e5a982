use crate::{Model, Msg};
use gloo_console::error;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::Assessment;
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;

/// Posts one image to the analyze endpoint and delivers the outcome back to
/// the component as a message.
pub fn send_analysis_request(link: Scope<Model>, file: GlooFile, threshold_pct: f32) {
    spawn_local(async move {
        let form_data = web_sys::FormData::new().unwrap();
        form_data.append_with_blob("image", file.as_ref()).unwrap();

        let request = match Request::post(&format!("/api/analyze?threshold={threshold_pct}"))
            .body(form_data)
        {
            Ok(request) => request,
            Err(e) => {
                link.send_message(Msg::SetError(Some(format!("Failed to build request: {e}"))));
                return;
            }
        };

        match request.send().await {
            Ok(response) if response.ok() => match response.json::<Assessment>().await {
                Ok(assessment) => link.send_message(Msg::AssessmentReady(assessment)),
                Err(e) => link.send_message(Msg::SetError(Some(format!(
                    "Failed to parse response: {e}"
                )))),
            },
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                error!(format!("Server error: {status} - {body}"));
                link.send_message(Msg::SetError(Some(format!(
                    "Server error: {status} - {body}"
                ))));
            }
            Err(e) => link.send_message(Msg::SetError(Some(format!("Network error: {e}")))),
        }
    });
}
