//! Built-in dialogues served by the mock generator.

use corpus_models::{Dialogue, Message, Speaker};

fn exchange(topic: &str, lines: &[&str]) -> Dialogue {
    let turns = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let speaker = if i % 2 == 0 { Speaker::A } else { Speaker::B };
            Message::new(speaker, *line)
        })
        .collect();
    Dialogue::new(topic, turns)
}

pub fn corpus() -> Vec<Dialogue> {
    vec![
        exchange(
            "التحية والتعارف",
            &[
                "السلام عليكم، كيف حالك؟",
                "وعليكم السلام، بخير والحمد لله. وأنت؟",
                "بخير، شكراً. اسمي سامي، وما اسمك؟",
                "اسمي ليلى، تشرفت بمعرفتك.",
            ],
        ),
        exchange(
            "في المطعم",
            &[
                "مساء الخير، هل عندكم طاولة لشخصين؟",
                "نعم، تفضلا من هنا.",
                "ما هو طبق اليوم؟",
                "عندنا كبسة باللحم وسلطة فتوش.",
                "سآخذ الكبسة من فضلك.",
            ],
        ),
        exchange(
            "في السوق",
            &[
                "بكم كيلو الطماطم؟",
                "بخمسة دراهم.",
                "هذا غالٍ قليلاً، هل يمكن أن تخفض السعر؟",
                "لأجلك بأربعة دراهم.",
            ],
        ),
        exchange(
            "السؤال عن الطريق",
            &[
                "عفواً، أين محطة القطار؟",
                "امشِ مباشرة ثم انعطف يميناً عند الإشارة.",
                "هل هي بعيدة؟",
                "لا، حوالي عشر دقائق مشياً.",
            ],
        ),
        exchange(
            "عند الطبيب",
            &[
                "ما بك؟",
                "عندي صداع وحرارة منذ يومين.",
                "سأكتب لك دواءً، وعليك أن ترتاح.",
                "شكراً يا دكتور.",
            ],
        ),
        exchange(
            "التخطيط لعطلة نهاية الأسبوع",
            &[
                "ماذا ستفعل يوم الجمعة؟",
                "لا شيء بعد، لماذا؟",
                "ما رأيك أن نذهب إلى البحر؟",
                "فكرة رائعة! سأحضر الغداء.",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speakers_alternate_starting_with_a() {
        for dialogue in corpus() {
            assert!(dialogue.turns[0].line(Speaker::A).is_some());
            assert!(dialogue.turns[1].line(Speaker::B).is_some());
        }
    }

    #[test]
    fn corpus_text_survives_transport_escaping() {
        for dialogue in corpus() {
            for turn in &dialogue.turns {
                let text = turn.line(Speaker::A).or(turn.line(Speaker::B)).unwrap();
                assert!(!text.contains(['"', '\\', '\n']));
            }
        }
    }
}
