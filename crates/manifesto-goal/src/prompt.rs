//! Prompt templates for the text and speech models.

use crate::form::GoalForm;

/// Closing sentence every goal picture must end with, word for word.
pub const CLOSING_LINE: &str = "Cảm ơn chủ tịch Liên Minh Câu Lạc Bộ Tri Thức và Sách thầy tài phiệt Mr. Eric Lê, cảm ơn chủ tịch Đoàn Mai Ly, Chủ tịch Khúc Quang Vương, cảm ơn Doanh Nhân Hồng Nga, cảm ơn doanh nhân Lê Trường, cảm ơn tiềm thức.";

/// Instruction prepended to the text sent to the speech model.
pub const SPEECH_INSTRUCTION: &str =
    "Đọc diễn cảm văn bản sau với giọng tràn đầy năng lượng và niềm tin: ";

/// Builds the prompt asking the text model for a 30-day goal picture.
///
/// Every form field is interpolated as-is; validate the form first.
pub fn narrative_prompt(form: &GoalForm) -> String {
    let GoalForm {
        target_date,
        full_name,
        profit_goal,
        bank_account,
        money_sound,
        location,
        dominant_sense,
        companion,
        companion_age,
        companion_activity,
        congratulators,
        informal_title,
        platform,
        professional_title,
    } = form;

    format!(
        "Hãy viết một bức tranh mục tiêu tài chính 30 ngày đầy cảm hứng, sống động và ở thời hiện tại dựa trên các thông tin sau:
- Ngày đạt mục tiêu: {target_date}
- Tên: {full_name}
- Lợi nhuận: {profit_goal} VNĐ
- Tài khoản nhận tiền: {bank_account}
- Giây phút tiền về: {money_sound}
- Ở đâu: {location}
- Giác quan chủ đạo: {dominant_sense}
- Ở với ai: {companion}
- Tuổi của người ấy: {companion_age}
- Người ấy đang làm gì: {companion_activity}
- Ai nhắn tin chúc mừng: {congratulators}
- Họ gọi tôi là (xưng hô thân mật): {informal_title}
- Nhắn tin vào đâu (cộng đồng): {platform}
- Họ gọi tôi là (danh hiệu chuyên nghiệp): {professional_title}

YÊU CẦU QUAN TRỌNG:
- KHÔNG viết đoạn chào hỏi xã giao ở đầu.
- Bắt đầu TRỰC TIẾP vào nội dung bức tranh.
- KHÔNG có các ký tự tiêu đề như \"***\" hay \"BỨC TRANH MỤC TIÊU...\".

Yêu cầu cấu trúc bài viết:
1. Mở đầu: \"Hôm nay ngày {target_date}, tôi {full_name} đang ở {location} cùng với {companion} {companion_age} của mình. {companion} đang {companion_activity}...\"
2. Lồng ghép khéo léo 6 nhu cầu của Tony Robbins (Chắc chắn, Đa dạng, Ý nghĩa, Kết nối/Yêu thương, PHÁT TRIỂN, CỐNG HIẾN). Nhu cầu PHÁT TRIỂN thể hiện qua việc nâng cao tư duy, nhu cầu CỐNG HIẾN thể hiện qua việc giúp đỡ người khác.
3. Mô tả sống động bằng 6 giác quan (Nhìn, Nghe, Ngửi, Nếm, Chạm, Cảm xúc).
4. Đặc biệt thêm 3 câu liên tiếp về giác quan chủ đạo ({dominant_sense}). Ví dụ nếu là nghe: \"Tôi nghe..., Tôi nghe..., Tôi nghe...\"
5. Khoảnh khắc cao trào: Tiếng {money_sound} vang lên, mở điện thoại thấy thông báo từ tài khoản {bank_account}, tiền về đúng con số {profit_goal} VNĐ.
6. Những người sau đây nhắn tin chúc mừng: {congratulators}. Trích dẫn lời chúc của họ gọi bạn là {informal_title} và {professional_title}.
7. Hành động gửi tin nhắn vào {platform} và nhận hàng trăm lời chúc mừng dành cho {professional_title}.
8. Kết thúc bắt buộc (không được thay đổi): \"{CLOSING_LINE}\"

Hãy viết bằng văn phong giàu cảm xúc, năng lượng cao, truyền cảm hứng.
"
    )
}

/// Builds the prompt asking the speech model to read `text` aloud.
pub fn speech_prompt(text: &str) -> String {
    format!("{}{}", SPEECH_INSTRUCTION, text)
}

/// File name offered for the downloaded narration.
///
/// Path separators and other characters that are unsafe in file names are
/// replaced with `_`, so the result is always a single path segment.
pub fn download_file_name(form: &GoalForm) -> String {
    let name: String = form
        .full_name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let name = match name.as_str() {
        "" | "." | ".." => "_".to_string(),
        _ => name,
    };
    format!("Muc_Tieu_30_Ngay_{}.wav", name)
}
