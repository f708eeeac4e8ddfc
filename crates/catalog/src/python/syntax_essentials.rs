use course_core::model::{CodeSample, Lesson, PracticeItem, StartHere, Subsection};

pub(crate) fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new("syntax-essentials", "Section 2 — Python Syntax Essentials")
            .with_summary(
                "print & input, comments, indentation, and simple expressions — explained simply.",
            )
            .with_duration(35)
            .with_content(
                "In this section we learn how to talk to the computer (print & input), write friendly notes (comments), use spaces correctly (indentation), and do small maths (expressions).",
            )
            .with_start_here(
                StartHere::new([
                    "Say things on screen with `print()`.",
                    "Ask the user for text with `input()` and turn it into a number.",
                    "Use comments as friendly notes for humans.",
                    "Understand that spaces (indentation) show what belongs together.",
                    "Do simple maths and make Python follow the right order.",
                ])
                .with_prerequisites(["Finished Section 1 — Introduction & Setup"])
                .with_resource(
                    "Built-in print()",
                    "https://docs.python.org/3/library/functions.html#print",
                )
                .with_resource("input()", "https://docs.python.org/3/library/functions.html#input")
                .with_resource("Docstrings (PEP 257)", "https://peps.python.org/pep-0257/")
                .with_resource(
                    "Operator Precedence",
                    "https://docs.python.org/3/reference/expressions.html#operator-precedence",
                )
                .with_tip(
                    r#"If something looks wrong, add a tiny `print("here!")` to see what your code is doing."#,
                )
                .with_jump_to(true),
            )
            .with_subsection(
                Subsection::new(
                    "say-hello-and-ask",
                    "Say Hello & Ask a Question",
                    r"We use `print()` to *say things* on the screen.
We use `input()` to *ask a question*. `input()` always gives us **text**. If we want a number, we change it with `int()`.

**Try it:** Run each tab. Change the words. See what happens!",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Print",
                        r#"print("Hello!")              # Hello!
print("I like Python")     # I like Python

# Extra: control spaces and newlines
print("A", "B", "C")        # A B C
print("A","B","C", sep="-") # A-B-C
print("No newline", end="")
print(" <- continues same line")"#,
                    ),
                    CodeSample::labeled(
                        "Ask for input",
                        r#"name = input("What is your name? ")
print("Nice to meet you,", name)"#,
                    ),
                    CodeSample::labeled(
                        "Make it pretty (f-strings)",
                        r#"name = input("Name: ")
print(f"Hi {name}! Welcome!")   # easy and clean"#,
                    ),
                    CodeSample::labeled(
                        "Turn text into a number",
                        r#"age_text = input("How old are you? ")
age = int(age_text)          # change text -> number
print(f"Next year you will be {age + 1}")"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "comments-and-docstrings",
                    "Comments",
                    r"A **comment** starts with `#`. Python ignores it. We write comments to explain *why* we did something.

A **docstring** is a big note at the top of a function. It tells what the function does. Tools like `help()` can show it.

**Tip:** Short and clear comments are best.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Line comments",
                        r"# Add two numbers together
a = 4     # first number
b = 6     # second number
print(a + b)  # show the answer",
                    ),
                    CodeSample::labeled(
                        "Docstring",
                        r#"def hello(name: str) -> None:
    """Say hello to a person by name."""
    print(f"Hello, {name}!")

help(hello)  # shows the docstring in the terminal"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "indentation",
                    "Indentation",
                    r"Python cares about **spaces** at the start of the line (indentation).
When a line ends with a colon `:`, the next lines that are *indented* belong to it.

**Rule of thumb:** Use **4 spaces** for each level. Keep lines lined up neatly.",
                )
                .with_codes([CodeSample::labeled(
                    "Blocks",
                    r#"x = 7
if x > 5:
    print("x is big")
    print("these two lines are inside the if-block")
print("this line is outside the if-block")

def cheer():
    print("Go Python!")   # inside the function
cheer()                   # outside again"#,
                )]),
            )
            .with_subsection(
                Subsection::new(
                    "expressions-easy-math",
                    "Expressions",
                    r"An **expression** is a little calculation that becomes a value.
Python follows an order (like school maths): first multiply/divide, then add/subtract.
We can use parentheses to make the order clear.

**Logic words:** `and` means both must be true, `or` means at least one is true.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Math order",
                        r"print(2 + 3 * 4)     # 14  (3*4 happens first)
print((2 + 3) * 4)   # 20  (parentheses first)",
                    ),
                    CodeSample::labeled(
                        "Logic",
                        r"is_raining = True
have_umbrella = False
print(is_raining and have_umbrella)  # False
print(is_raining or have_umbrella)   # True",
                    ),
                    CodeSample::labeled(
                        "Compare numbers",
                        r"age = 10
print(age >= 10)     # True
print(5 < age < 12)  # True (chained comparisons)",
                    ),
                ]),
            )
            .with_practice(
                PracticeItem::new(
                    "s2-favorite-color",
                    "Favorite color",
                    "Ask for a color and print: “I like <color> too!”",
                )
                .with_solution(
                    r#"color = input("Favorite color: ")
print(f"I like {color} too!")"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s2-sum-two",
                    "Add two numbers",
                    "Ask for two numbers and print their sum.",
                )
                .with_starter_code(
                    r#"a_text = input("First number: ")
b_text = input("Second number: ")
# convert and print the sum"#,
                )
                .with_hint("Use int() to turn text into numbers.")
                .with_solution(
                    r#"a = int(a_text)
b = int(b_text)
print("Sum =", a + b)"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s2-teen-or-kid",
                    "Teen or Kid",
                    "Ask for age. If age is 13 or more, print “Teen”. Otherwise print “Kid”.",
                )
                .with_solution(
                    r#"age = int(input("Age: "))
if age >= 13:
    print("Teen")
else:
    print("Kid")"#,
                ),
            ),
    ]
}
