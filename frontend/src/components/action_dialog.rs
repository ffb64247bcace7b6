//! Hộp thoại xác nhận / nhập liệu dùng chung.
//!
//! Thay cho `window.confirm`/`window.prompt`: caller `await` một future,
//! host render hộp thoại từ trạng thái. Máy trạng thái chỉ có hai trạng
//! thái (rảnh / đang chờ); resolver nằm trong [`DialogSlot`] kiểu
//! lấy-một-lần nên mỗi hộp thoại chỉ được chốt kết quả đúng một lần,
//! bấm thêm hay phím thêm đều thành no-op.

use std::sync::{Arc, Mutex};

use futures::channel::oneshot;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Kết quả một hộp thoại.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Người dùng đồng ý (hộp xác nhận).
    Confirmed,
    /// Người dùng gửi nội dung nhập (hộp nhập liệu). Chuỗi rỗng hợp lệ.
    Input(String),
    /// Huỷ, Escape, hoặc bị từ chối vì đang có hộp thoại khác.
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Confirm,
    Prompt,
}

/// Ô giữ resolver, lấy ra đúng một lần.
#[derive(Clone)]
pub struct DialogSlot(Arc<Mutex<Option<oneshot::Sender<DialogOutcome>>>>);

impl DialogSlot {
    pub fn new(sender: oneshot::Sender<DialogOutcome>) -> Self {
        Self(Arc::new(Mutex::new(Some(sender))))
    }

    /// Chốt kết quả. Trả về `false` nếu đã chốt trước đó.
    pub fn resolve(&self, outcome: DialogOutcome) -> bool {
        let Ok(mut guard) = self.0.lock() else {
            return false;
        };
        match guard.take() {
            Some(sender) => sender.send(outcome).is_ok(),
            None => false,
        }
    }
}

/// Hộp thoại đang mở.
#[derive(Clone)]
pub struct PendingDialog {
    pub kind: DialogKind,
    pub message: String,
    /// Nội dung ô nhập (chỉ hộp Prompt dùng).
    pub input: RwSignal<String>,
    slot: DialogSlot,
}

/// Dịch vụ hộp thoại, chia sẻ qua Context.
#[derive(Clone, Copy)]
pub struct DialogService {
    pending: RwSignal<Option<PendingDialog>>,
}

impl DialogService {
    pub fn new() -> Self {
        Self { pending: RwSignal::new(None) }
    }

    /// Hỏi xác nhận. `true` khi người dùng đồng ý.
    pub async fn confirm(&self, message: &str) -> bool {
        matches!(
            self.open(DialogKind::Confirm, message, String::new()).await,
            DialogOutcome::Confirmed
        )
    }

    /// Hỏi một chuỗi. `None` khi huỷ; `Some` kể cả khi chuỗi rỗng.
    pub async fn prompt(&self, message: &str, initial: &str) -> Option<String> {
        match self.open(DialogKind::Prompt, message, initial.to_string()).await {
            DialogOutcome::Input(value) => Some(value),
            _ => None,
        }
    }

    async fn open(&self, kind: DialogKind, message: &str, initial: String) -> DialogOutcome {
        // Đang có hộp thoại khác: trả lời phủ định ngay, không xếp hàng.
        if self.pending.with_untracked(|p| p.is_some()) {
            return DialogOutcome::Negative;
        }

        let (sender, receiver) = oneshot::channel();
        self.pending.set(Some(PendingDialog {
            kind,
            message: message.to_string(),
            input: RwSignal::new(initial),
            slot: DialogSlot::new(sender),
        }));

        receiver.await.unwrap_or(DialogOutcome::Negative)
    }

    /// Chốt kết quả và đóng hộp thoại.
    pub fn resolve(&self, outcome: DialogOutcome) {
        if let Some(dialog) = self.pending.get_untracked() {
            dialog.slot.resolve(outcome);
        }
        self.pending.set(None);
    }

    /// Gửi nội dung ô nhập hiện tại (hộp Prompt).
    pub fn submit_prompt(&self) {
        let value = self
            .pending
            .with_untracked(|p| p.as_ref().map(|d| d.input.get_untracked()));
        if let Some(value) = value {
            self.resolve(DialogOutcome::Input(value));
        }
    }
}

impl Default for DialogService {
    fn default() -> Self {
        Self::new()
    }
}

/// Lấy dịch vụ hộp thoại từ Context.
pub fn use_dialogs() -> DialogService {
    use_context::<DialogService>().expect("DialogService chưa được cung cấp")
}

// ============================================================================
// UI component
// ============================================================================

/// Host render hộp thoại đang mở và bắt phím toàn cục.
///
/// Escape luôn chốt phủ định. Enter chỉ có nghĩa với hộp nhập liệu,
/// gửi nội dung hiện tại của ô nhập.
#[component]
pub fn ActionDialogHost() -> impl IntoView {
    let dialogs = use_dialogs();

    // Một listener keydown duy nhất trên window cho suốt đời trang;
    // không có hộp thoại đang mở thì bỏ qua phím.
    let closure = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(
        move |event: web_sys::KeyboardEvent| {
            let Some(kind) = dialogs.pending.with_untracked(|p| p.as_ref().map(|d| d.kind))
            else {
                return;
            };
            match event.key().as_str() {
                "Escape" => dialogs.resolve(DialogOutcome::Negative),
                "Enter" if kind == DialogKind::Prompt => {
                    event.prevent_default();
                    dialogs.submit_prompt();
                }
                _ => {}
            }
        },
    );
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();

    view! {
        {move || {
            dialogs.pending.get().map(|dialog| {
                let kind = dialog.kind;
                let input = dialog.input;
                view! {
                    <div class="modal modal-open">
                        <div class="modal-box">
                            <p class="py-2">{dialog.message.clone()}</p>
                            {(kind == DialogKind::Prompt)
                                .then(|| {
                                    view! {
                                        <input
                                            type="text"
                                            class="input input-bordered w-full"
                                            prop:value=move || input.get()
                                            on:input=move |ev| {
                                                input.set(event_target_value(&ev));
                                            }
                                        />
                                    }
                                })}
                            <div class="modal-action">
                                <button
                                    class="btn btn-ghost"
                                    on:click=move |_| dialogs.resolve(DialogOutcome::Negative)
                                >
                                    "Huỷ"
                                </button>
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| {
                                        match kind {
                                            DialogKind::Confirm => {
                                                dialogs.resolve(DialogOutcome::Confirmed)
                                            }
                                            DialogKind::Prompt => dialogs.submit_prompt(),
                                        }
                                    }
                                >
                                    "Đồng ý"
                                </button>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn slot_chi_chot_mot_lan() {
        let (sender, receiver) = oneshot::channel();
        let slot = DialogSlot::new(sender);

        assert!(slot.resolve(DialogOutcome::Confirmed));
        assert!(!slot.resolve(DialogOutcome::Negative));
        assert!(!slot.resolve(DialogOutcome::Confirmed));

        assert_eq!(block_on(receiver), Ok(DialogOutcome::Confirmed));
    }

    #[test]
    fn slot_giu_ket_qua_dau_tien() {
        let (sender, receiver) = oneshot::channel();
        let slot = DialogSlot::new(sender);

        slot.resolve(DialogOutcome::Input("tên mới".to_string()));
        slot.resolve(DialogOutcome::Input("ghi đè".to_string()));

        assert_eq!(
            block_on(receiver),
            Ok(DialogOutcome::Input("tên mới".to_string()))
        );
    }

    #[test]
    fn chuoi_rong_van_la_ket_qua_gui() {
        let (sender, receiver) = oneshot::channel();
        let slot = DialogSlot::new(sender);

        slot.resolve(DialogOutcome::Input(String::new()));

        assert_eq!(block_on(receiver), Ok(DialogOutcome::Input(String::new())));
    }

    #[test]
    fn receiver_rot_thanh_phu_dinh() {
        let (sender, receiver) = oneshot::channel::<DialogOutcome>();
        drop(sender);

        assert_eq!(
            block_on(async { receiver.await.unwrap_or(DialogOutcome::Negative) }),
            DialogOutcome::Negative
        );
    }
}
