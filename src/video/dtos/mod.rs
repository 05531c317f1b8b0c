pub mod generate_video_dto;
pub mod video_form_dto;

pub fn sanitize_prompt(prompt: &str) -> String {
    prompt.trim().replace('\n', "").replace('\r', "")
}
