use leptos::*;
use nourish::panels::document_scanner::{FindingStatus, UploadedFile};
use nourish::panels::DocumentScannerPanel;
use wasm_bindgen::JsCast;

use super::{read, write, BulletList, PanelTitle};
use crate::components::Loading;
use crate::state::{use_app_state, ShellHandle};

/// First file picked in a file input
pub(super) fn picked_file(ev: &ev::Event) -> Option<web_sys::File> {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

fn status_class(status: FindingStatus) -> &'static str {
    match status {
        FindingStatus::Normal => "bg-emerald-100 text-emerald-700",
        FindingStatus::High => "bg-red-100 text-red-700",
        FindingStatus::Low => "bg-amber-100 text-amber-700",
    }
}

#[component]
pub fn DocumentScanner(shell: ShellHandle) -> impl IntoView {
    let state = use_app_state();

    let uploaded = move || read(shell, |p: &DocumentScannerPanel| p.uploaded().cloned()).flatten();
    let scanning = move || read(shell, |p: &DocumentScannerPanel| p.is_loading()).unwrap_or(false);
    let report = move || read(shell, |p: &DocumentScannerPanel| p.report()).flatten();

    let on_pick = move |ev: ev::Event| {
        let Some(file) = picked_file(&ev) else {
            return;
        };
        let upload = UploadedFile::new(file.name(), file.size() as u64);
        match write(shell, |p: &mut DocumentScannerPanel| p.upload(upload)) {
            Some(Ok(pending)) => shell.run(pending),
            Some(Err(e)) => state.toasts().error("Upload Error", e.to_string()),
            None => {}
        }
    };

    view! {
        <div class="space-y-6">
            <PanelTitle
                title="Medical Report Scanner"
                subtitle="Upload a lab report for an instant, plain-language interpretation"
            />

            <label class="block bg-white rounded-xl p-8 border-2 border-dashed border-emerald-200 text-center cursor-pointer hover:bg-emerald-50">
                <div class="text-4xl mb-2">"📄"</div>
                <p class="font-medium">"Click to upload your medical report"</p>
                <p class="text-sm text-gray-500">"PDF, JPG or PNG up to 10MB"</p>
                <input type="file" accept=".pdf,.jpg,.jpeg,.png" class="hidden" on:change=on_pick />
            </label>

            {move || uploaded().map(|file| view! {
                <div class="bg-white rounded-xl p-4 border border-emerald-100 flex justify-between text-sm">
                    <span class="font-medium">{file.name.clone()}</span>
                    <span class="text-gray-500">{file.size_label()}</span>
                </div>
            })}

            <Show when=scanning>
                <Loading label="Analyzing your report..." />
            </Show>

            {move || report().map(|report| view! {
                <div class="bg-white rounded-xl p-6 border border-emerald-100 space-y-4">
                    <div class="flex justify-between items-start">
                        <div>
                            <h2 class="text-2xl font-bold">{report.report_type}</h2>
                            <p class="text-sm text-gray-500">{report.date}</p>
                        </div>
                        <span class="text-sm bg-amber-100 text-amber-700 rounded-full px-3 py-1">
                            {report.overall_status}
                        </span>
                    </div>

                    <div class="space-y-2">
                        {report.findings
                            .iter()
                            .map(|finding| view! {
                                <div class="p-3 rounded-lg border border-gray-100">
                                    <div class="flex justify-between">
                                        <span class="font-medium">{finding.parameter}</span>
                                        <span class=format!("text-xs rounded-full px-2 py-0.5 {}", status_class(finding.status))>
                                            {finding.status.label()}
                                        </span>
                                    </div>
                                    <p class="text-sm">
                                        {format!("{} (normal: {})", finding.value, finding.normal_range)}
                                    </p>
                                    <p class="text-sm text-gray-500">{finding.interpretation}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>

                    <div>
                        <h3 class="font-semibold mb-2">
                            {format!("Needs Attention ({})", report.attention_findings().count())}
                        </h3>
                        <ul class="text-sm space-y-1">
                            {report
                                .attention_findings()
                                .map(|f| view! { <li>{format!("{}: {}", f.parameter, f.value)}</li> })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class="font-semibold mb-2">"Recommendations"</h3>
                        <BulletList items=report.recommendations marker="✓" />
                    </div>
                </div>
            })}
        </div>
    }
}
