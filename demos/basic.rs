use bitok::{Language, SentenceTokenizer, Tokenizer, Vocabulary, WordTokenizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ko_text = "위의 예제는 Okt 형태소 분석기로 토큰화를 시도해본 예제입니다. 각각의 메소드는 아래와 같은 기능을 갖고 있습니다.";
    let en_text = "The above example is an example of tokenization attempted with the Okt morpheme analyzer. Each method has the following functions.";

    let sentence_tokenizer = SentenceTokenizer::new();
    let sentences = sentence_tokenizer.tokenize_default(en_text)?;
    println!("{sentences:?}");

    let word_tokenizer = WordTokenizer::new();
    let tokens = word_tokenizer.tokenize_default(en_text)?;
    println!("{tokens:?}");

    let vocab = Vocabulary::from_tokens(&tokens);
    println!("{vocab}");

    for sentence in sentence_tokenizer.tokenize(ko_text, Language::Korean)? {
        println!("ko: {sentence}");
    }

    Ok(())
}
