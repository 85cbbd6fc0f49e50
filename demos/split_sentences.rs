use bitok::{english, korean, KoreanSentenceOptions};

fn main() {
    let ko_text = "여러 문장으로 구성된 텍스트네요 이걸 분리해줘. 소수점 3.14도 괜찮아요!";
    let en_text = "Dr. Kim wrote this at 5 p.m. on Friday. Did it work? Yes.";

    let options = KoreanSentenceOptions::default();
    let bounds = korean::sentence_bounds(ko_text, options);
    let sentences = korean::split_sentences(ko_text, options);
    for (index, (bound, sentence)) in bounds.iter().zip(&sentences).enumerate() {
        println!("ko #{index}: [{}..{}] {sentence}", bound.begin, bound.end);
    }

    let bounds = english::sentence_bounds(en_text);
    let sentences = english::split_sentences(en_text);
    for (index, (bound, sentence)) in bounds.iter().zip(&sentences).enumerate() {
        println!("en #{index}: [{}..{}] {sentence}", bound.begin, bound.end);
    }
}
