//! Bottom-right action buttons: assistant chat, WhatsApp, scroll-to-top.

use leptos::prelude::*;

use crate::components::icon::SvgIcon;
use crate::content::profile::WHATSAPP_NUMBER;
use crate::state::chat::{ChatState, Sender};
use crate::state::ui::UiState;
use crate::util::icon::Icon;
use crate::util::links::{copy_to_clipboard, open_in_new_tab, whatsapp_link};
use crate::util::scroll::scroll_to_top;

#[component]
pub fn FloatingActions() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let on_whatsapp = move |_| {
        let link = whatsapp_link(WHATSAPP_NUMBER);
        open_in_new_tab(&link);
        if copy_to_clipboard(&link) {
            let seq = ui.try_update(|u| u.show_toast("WhatsApp link copied to clipboard"));
            #[cfg(feature = "hydrate")]
            {
                if let Some(seq) = seq {
                    leptos::task::spawn_local(async move {
                        let ttl = std::time::Duration::from_millis(crate::state::ui::TOAST_MS);
                        gloo_timers::future::sleep(ttl).await;
                        ui.update(|u| u.dismiss_toast(seq));
                    });
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = seq;
            }
        }
    };

    let on_send = move || {
        let mut sent = false;
        chat.update(|c| sent = c.send());
        if !sent {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(crate::state::chat::REPLY_DELAY).await;
                chat.update(ChatState::push_reply);
            });
        }
    };

    let transcript = move || {
        chat.with(|c| {
            c.messages
                .iter()
                .map(|m| {
                    let text = m.text.clone();
                    let from_visitor = m.sender == Sender::Visitor;
                    view! {
                        <div
                            class="chat__message"
                            class:chat__message--visitor=from_visitor
                            class:chat__message--assistant={!from_visitor}
                        >
                            {text}
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="floating">
            <Show when=move || chat.with(|c| c.open)>
                <div class="chat" role="dialog" aria-label="Chat with assistant">
                    <div class="chat__header">
                        <SvgIcon icon=Icon::Bot />
                        <span>"AI Assistant"</span>
                        <button
                            class="chat__close"
                            aria-label="Close chat"
                            on:click=move |_| chat.update(ChatState::toggle)
                        >
                            <SvgIcon icon=Icon::Close />
                        </button>
                    </div>
                    <div class="chat__messages">{transcript}</div>
                    <form
                        class="chat__input"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            on_send();
                        }
                    >
                        <input
                            type="text"
                            placeholder="Type your message..."
                            prop:value=move || chat.with(|c| c.draft.clone())
                            on:input=move |ev| chat.update(|c| c.draft = event_target_value(&ev))
                        />
                        <button type="submit" aria-label="Send message">
                            <SvgIcon icon=Icon::Send />
                        </button>
                    </form>
                </div>
            </Show>

            <Show when=move || ui.with(|u| u.toast.is_some())>
                <div class="toast" role="status">
                    {move || ui.with(|u| u.toast.as_ref().map(|t| t.message.clone()))}
                </div>
            </Show>

            <div class="floating__buttons">
                <Show when=move || ui.with(|u| u.show_scroll_top)>
                    <button
                        class="floating__button floating__button--top"
                        aria-label="Scroll to top"
                        on:click=move |_| scroll_to_top()
                    >
                        <SvgIcon icon=Icon::ArrowUp />
                    </button>
                </Show>
                <button
                    class="floating__button floating__button--whatsapp"
                    aria-label="Chat on WhatsApp"
                    on:click=on_whatsapp
                >
                    <SvgIcon icon=Icon::Phone />
                </button>
                <button
                    class="floating__button floating__button--chat"
                    aria-label="Toggle assistant chat"
                    on:click=move |_| chat.update(ChatState::toggle)
                >
                    <SvgIcon icon=Icon::MessageSquare />
                </button>
            </div>
        </div>
    }
}
