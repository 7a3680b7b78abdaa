use crate::pages::super_admin::view_model::use_news_form_view_model;
use leptos::{ev, *};

#[component]
pub fn NewsForm() -> impl IntoView {
    let vm = use_news_form_view_model();
    let form = vm.form;
    let submitting = create_memo(move |_| form.with(|state| state.submitting));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit.call(());
    };

    view! {
        <section class="bg-white shadow rounded-lg p-6" data-panel="konten">
            <h2 class="text-lg font-semibold text-gray-900">"Tulis Berita"</h2>
            <p class="mt-1 text-sm text-gray-600">"Berita akan tampil di halaman utama sekolah."</p>
            <form class="mt-6 space-y-4" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Judul"</label>
                    <input
                        type="text"
                        name="title"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        placeholder="Judul berita"
                        required
                        disabled=move || submitting.get()
                        prop:value=move || form.with(|state| state.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.title = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Isi"</label>
                    <textarea
                        name="content"
                        rows="6"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        required
                        disabled=move || submitting.get()
                        prop:value=move || form.with(|state| state.content.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.content = value);
                        }
                    ></textarea>
                </div>
                <div class="flex justify-end">
                    <button
                        type="submit"
                        class="px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 disabled:opacity-50"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Menyimpan..." } else { "Terbitkan" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
