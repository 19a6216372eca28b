//! Recipient selector and command help.

use std::fmt::Write as _;

use emotone_core::RecipientCategory;

/// Renders the recipient list with the current choice marked.
pub fn view_header(selected: RecipientCategory) -> String {
    let mut out = String::from("누구에게 보낼 메시지인가요?\n");
    for recipient in RecipientCategory::ALL {
        let marker = if recipient == selected { "▸" } else { " " };
        let _ = writeln!(
            out,
            " {marker} {} {} ({}) - {}",
            recipient.icon(),
            recipient.label(),
            recipient.as_str(),
            recipient.description()
        );
    }
    out
}

/// Renders the interactive command list.
pub fn view_help() -> String {
    [
        "메시지를 입력하고 Enter를 누르면 추천 메시지가 표시됩니다.",
        "  :to <boss|colleague|friend>  받는 사람 변경",
        "  :copy <번호>                 추천 메시지 복사",
        "  :reset                       결과 지우기",
        "  :help                        도움말",
        "  :quit                        종료",
    ]
    .join("\n")
}
