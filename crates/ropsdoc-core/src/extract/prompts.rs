//! Prompts for the completion stages of the handwritten pipeline.

use ropsdoc_backend::ChatMessage;

const CLEAN_SYSTEM: &str = "You are an AI assistant that helps people clean and format text.";

const EXTRACT_SYSTEM: &str =
    "You are an AI assistant that extracts specific information from text.";

/// Messages asking the model to clean raw OCR output.
pub fn clean_messages(raw_text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(CLEAN_SYSTEM),
        ChatMessage::user(format!(
            "Please clean the following OCR-extracted text by removing any extraneous characters, \
             correcting grammatical errors, and ensuring proper punctuation while maintaining the \
             original context and meaning.\n\nText:\n{}",
            raw_text
        )),
    ]
}

/// Messages asking the model for the summary and identity fields as JSON.
pub fn extract_messages(cleaned_text: &str, summary_language: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(EXTRACT_SYSTEM),
        ChatMessage::user(format!(
            "From the following text, extract the summary in {} language only, first name, \
             last name, and CNP. Return the results strictly in JSON format with the keys \
             'summary', 'first_name', 'last_name', and 'cnp'. Do not include any additional \
             text, explanations, or formatting. Do not use code blocks.\n\nText:\n{}",
            summary_language, cleaned_text
        )),
    ]
}
