//! Notification templates.
//!
//! Each builder produces a subject / HTML / plain-text triple. The layout is
//! shared: a branded header, a content block, and a muted footer.

/// A fully rendered notification ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub subject: String,
    pub html: String,
    pub text: String,
}

fn layout(title: &str, body_html: &str) -> String {
    format!(
        concat!(
            "<div style=\"font-family:Arial,sans-serif;max-width:600px;margin:0 auto\">",
            "<div style=\"background:#c0392b;color:#fff;padding:16px 24px\">",
            "<h1 style=\"margin:0;font-size:20px\">HÙNG YÊU</h1>",
            "</div>",
            "<div style=\"padding:24px;border:1px solid #eee;border-top:none\">",
            "<h2 style=\"margin-top:0\">{title}</h2>",
            "{body}",
            "</div>",
            "<p style=\"color:#999;font-size:12px;padding:0 24px\">",
            "Email này được gửi tự động, vui lòng không trả lời.",
            "</p>",
            "</div>"
        ),
        title = title,
        body = body_html,
    )
}

/// Account verification mail carrying the one-shot confirmation link.
pub fn verification(username: &str, verify_url: &str) -> EmailMessage {
    EmailMessage {
        subject: "Xác nhận địa chỉ email của bạn".to_string(),
        html: layout(
            "Xác nhận email",
            &format!(
                concat!(
                    "<p>Chào {username},</p>",
                    "<p>Cảm ơn bạn đã đăng ký. Nhấn vào liên kết dưới đây để xác ",
                    "nhận địa chỉ email:</p>",
                    "<p><a href=\"{url}\" style=\"background:#c0392b;color:#fff;",
                    "padding:10px 20px;text-decoration:none;border-radius:4px\">",
                    "Xác nhận email</a></p>",
                    "<p>Hoặc mở liên kết: {url}</p>"
                ),
                username = username,
                url = verify_url,
            ),
        ),
        text: format!(
            "Chào {},\n\nXác nhận địa chỉ email của bạn tại: {}\n",
            username, verify_url
        ),
    }
}

/// Welcome mail sent once the email address is confirmed.
pub fn welcome(username: &str) -> EmailMessage {
    EmailMessage {
        subject: "Chào mừng bạn đến với HÙNG YÊU".to_string(),
        html: layout(
            "Chào mừng!",
            &format!(
                concat!(
                    "<p>Chào {username},</p>",
                    "<p>Tài khoản của bạn đã được kích hoạt. Chúc bạn có những ",
                    "giờ phút đọc truyện thú vị!</p>"
                ),
                username = username,
            ),
        ),
        text: format!(
            "Chào {},\n\nTài khoản của bạn đã được kích hoạt. Chúc bạn đọc truyện vui vẻ!\n",
            username
        ),
    }
}

/// Notifies an author that their story passed moderation.
pub fn story_approved(username: &str, story_title: &str, story_url: &str) -> EmailMessage {
    EmailMessage {
        subject: format!("Truyện \"{}\" đã được duyệt", story_title),
        html: layout(
            "Truyện đã được duyệt",
            &format!(
                concat!(
                    "<p>Chào {username},</p>",
                    "<p>Truyện <strong>{title}</strong> của bạn đã được duyệt và ",
                    "hiển thị công khai.</p>",
                    "<p><a href=\"{url}\">Xem truyện</a></p>"
                ),
                username = username,
                title = story_title,
                url = story_url,
            ),
        ),
        text: format!(
            "Chào {},\n\nTruyện \"{}\" của bạn đã được duyệt: {}\n",
            username, story_title, story_url
        ),
    }
}

/// Notifies an author that their story was rejected, with the moderator's
/// reason when one was given.
pub fn story_rejected(username: &str, story_title: &str, reason: Option<&str>) -> EmailMessage {
    let reason_html = match reason {
        Some(reason) => format!("<p>Lý do: {}</p>", reason),
        None => String::new(),
    };
    let reason_text = match reason {
        Some(reason) => format!("Lý do: {}\n", reason),
        None => String::new(),
    };

    EmailMessage {
        subject: format!("Truyện \"{}\" chưa được duyệt", story_title),
        html: layout(
            "Truyện chưa được duyệt",
            &format!(
                concat!(
                    "<p>Chào {username},</p>",
                    "<p>Truyện <strong>{title}</strong> của bạn chưa được duyệt.</p>",
                    "{reason}",
                    "<p>Bạn có thể chỉnh sửa và gửi lại truyện bất cứ lúc nào.</p>"
                ),
                username = username,
                title = story_title,
                reason = reason_html,
            ),
        ),
        text: format!(
            "Chào {},\n\nTruyện \"{}\" của bạn chưa được duyệt.\n{}",
            username, story_title, reason_text
        ),
    }
}

/// Free-form system notice from the administrators.
pub fn system_notice(subject: &str, body: &str) -> EmailMessage {
    EmailMessage {
        subject: subject.to_string(),
        html: layout(subject, &format!("<p>{}</p>", body)),
        text: format!("{}\n", body),
    }
}
