use pinyin::ToPinyin;

/// 由标题生成 URL slug
///
/// 小写化，去除拉丁字母的变音符号，汉字转为不带声调的拼音，
/// 其余字符视为分隔符，各段以 `-` 连接。
/// 例如 "Jeu vidéo 0" → "jeu-video-0"，"恋爱 Game" → "lian-ai-game"。
pub fn slugify(title: &str) -> String {
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            current.push(c);
        } else if let Some(folded) = fold_latin(c) {
            current.push_str(folded);
        } else if let Some(pinyin) = c.to_pinyin() {
            flush(&mut segments, &mut current);
            segments.push(pinyin.plain().to_string());
        } else {
            flush(&mut segments, &mut current);
        }
    }
    flush(&mut segments, &mut current);

    if segments.is_empty() {
        return "game".to_string();
    }
    segments.join("-")
}

fn flush(segments: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        segments.push(std::mem::take(current));
    }
}

fn fold_latin(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'æ' => "ae",
        'ç' => "c",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'œ' => "oe",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'ß' => "ss",
        _ => return None,
    };
    Some(folded)
}
