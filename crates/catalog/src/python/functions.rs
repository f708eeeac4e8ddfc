use course_core::model::{CodeSample, Lesson, PracticeItem, StartHere, Subsection};

pub(crate) fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new("functions", "Section 9 — Functions")
            .with_summary(
                "Define functions, parameters & return values, *args/**kwargs, lambdas, docstrings, and scope/closures.",
            )
            .with_duration(60)
            .with_content(
                "Write small, reusable functions. Learn parameters (positional, keyword, defaults), flexible *args/**kwargs, lambdas for tiny callbacks, good docstrings, and how Python scope works (LEGB).",
            )
            .with_start_here(
                StartHere::new([
                    "Define clear functions with parameters, defaults, and return values.",
                    "Use *args/**kwargs to accept flexible inputs and to forward arguments.",
                    "Apply lambdas for tiny throwaway functions (e.g., sort keys).",
                    "Write helpful docstrings and add type hints.",
                    "Understand scope (LEGB), closures, and avoid the mutable default pitfall.",
                ])
                .with_prerequisites([
                    "Section 5 — Control Flow",
                    "Section 6 — Strings & Text Basics",
                    "Section 7 — Collections I",
                    "Section 8 — Collections II",
                ])
                .with_resource(
                    "Tutorial — Defining Functions",
                    "https://docs.python.org/3/tutorial/controlflow.html#defining-functions",
                )
                .with_resource(
                    "Function definitions (ref)",
                    "https://docs.python.org/3/reference/compound_stmts.html#function-definitions",
                )
                .with_resource("PEP 257 Docstrings", "https://peps.python.org/pep-0257/")
                .with_tip(
                    "Prefer many small functions over one long one. Keep names verbs for actions and nouns for calculators.",
                ),
            )
            .with_subsection(
                Subsection::new(
                    "define-return",
                    "Define & return values",
                    r"Use `def name(params):` to define a function. Return a value with `return`.  
You can give **default values**, return **multiple values** (as a tuple), and add **type hints** for clarity.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Basics + defaults + multiple returns",
                        r"def area_rect(w: float, h: float = 1.0) -> float:
    return w * h

print(area_rect(5))        # 5.0 (h defaulted to 1.0)
print(area_rect(5, 2))     # 10.0

def divmod2(a: int, b: int) -> tuple[int, int]:
    q = a // b
    r = a % b
    return q, r           # tuple
print(divmod2(14, 5))      # (2, 4)",
                    ),
                    CodeSample::labeled(
                        "Keyword arguments & readability",
                        r"def rectangle(w: float, h: float) -> float:
    return w * h

print(rectangle(w=3.0, h=4.0))  # keywords improve clarity",
                    ),
                    CodeSample::labeled(
                        "Guard clause pattern",
                        r#"def percent(part: float, whole: float) -> float | None:
    if whole == 0:          # guard "bad case" early
        return None
    return (part / whole) * 100"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "args-kwargs",
                    "Flexible parameters: *args and **kwargs",
                    r"Use `*args` to accept any number of **positional** args (as a tuple).  
Use `**kwargs` to accept any number of **keyword** args (as a dict).  
You can also **forward** arguments to other functions.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "*args (sum many)",
                        r"def sum_all(*args: float) -> float:
    total = 0.0
    for x in args:
        total += x
    return total

print(sum_all(1, 2, 3, 4.5))   # 10.5",
                    ),
                    CodeSample::labeled(
                        "**kwargs (options dict)",
                        r#"def connect(**opts):
    host = opts.get("host", "localhost")
    port = opts.get("port", 5432)
    secure = opts.get("secure", False)
    print(host, port, secure)

connect(host="db", secure=True)"#,
                    ),
                    CodeSample::labeled(
                        "Forwarding args/kwargs",
                        r#"def log_call(fn, *args, **kwargs):
    print("calling", fn.__name__, args, kwargs)
    return fn(*args, **kwargs)

def mul(a, b, scale=1):
    return a * b * scale

print(log_call(mul, 3, 5, scale=2))"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "lambdas",
                    "Lambdas & higher-order functions",
                    r"A **lambda** is a tiny anonymous function: `lambda params: expression`.  
Great as a short callback (e.g., `key=` for `sorted`). Prefer normal `def` for anything non-trivial.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Sort with a key",
                        r#"names = ["asha","Mia","lee","RAJ"]
print(sorted(names))                 # case-sensitive
print(sorted(names, key=str.lower))  # case-insensitive"#,
                    ),
                    CodeSample::labeled(
                        "Map/filter (small) vs comprehensions",
                        r"nums = [1,2,3,4,5]
print(list(map(lambda x: x*x, nums)))          # [1,4,9,16,25]
print(list(filter(lambda x: x%2==0, nums)))    # [2,4]
# In real code, prefer comprehensions:
squares = [x*x for x in nums]
evens   = [x for x in nums if x%2==0]",
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "docstrings",
                    "Docstrings & type hints",
                    r"Put a triple-quoted string at the top of a function to document **what** it does and important **args/returns** notes.  
Type hints make call sites and tools happier.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Docstring example",
                        r#"def greet(name: str, excited: bool = False) -> str:
    """Return a friendly greeting.

    Args:
        name: Person's name.
        excited: If True, add an exclamation.

    Returns:
        A short greeting line.
    """
    msg = f"Hello, {name}"
    return msg + "!" if excited else msg

print(greet.__doc__ is not None)"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "scope-closures",
                    "Scope (LEGB), global/nonlocal & closures",
                    r"Python looks up names in **L**ocal → **E**nclosing → **G**lobal → **B**uiltins.  
Avoid `global` for shared state. `nonlocal` allows inner functions to modify enclosing variables.  
**Closures** remember values from their enclosing scope.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "LEGB lookup",
                        r#"x = "global"
def outer():
    x = "enclosing"
    def inner():
        x = "local"
        print(x)        # local
    inner()
    print(x)            # enclosing
outer()
print(x)                # global"#,
                    ),
                    CodeSample::labeled(
                        "nonlocal (modify enclosing)",
                        r"def make_counter():
    count = 0
    def inc():
        nonlocal count
        count += 1
        return count
    return inc

c = make_counter()
print(c(), c(), c())   # 1 2 3",
                    ),
                    CodeSample::labeled(
                        "Closure (function factory)",
                        r"def make_multiplier(n: int):
    def mul(x: int) -> int:
        return n * x
    return mul

times3 = make_multiplier(3)
print(times3(10))   # 30",
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "mutable-defaults",
                    "Pitfall: mutable default parameters",
                    r"Never use a **mutable** object (like `[]` or `{}`) as a default. It is created **once** at function definition time and reused.  
Use `None` as the default and create a new object inside.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Buggy vs fixed",
                        r"def add_item_bad(x, bucket=[]):  # BAD
    bucket.append(x)
    return bucket

print(add_item_bad(1))  # [1]
print(add_item_bad(2))  # [1, 2]  (surprising!)

def add_item_ok(x, bucket=None):   # GOOD
    if bucket is None:
        bucket = []
    bucket.append(x)
    return bucket

print(add_item_ok(1))   # [1]
print(add_item_ok(2))   # [2]",
                    ),
                ]),
            )
            .with_practice(
                PracticeItem::new(
                    "s9-greet-default",
                    "Greeting with default",
                    r#"Write greet(name="World") -> "Hello, <name>!""#,
                )
                .with_solution(
                    r#"def greet(name: str = "World") -> str:
    return f"Hello, {name}!"
print(greet(), greet("Dhruv"))"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s9-sum-all",
                    "Sum all (*args)",
                    "Implement sum_all(*args) that returns the sum of any number of numbers.",
                )
                .with_solution(
                    r"def sum_all(*args: float) -> float:
    total = 0.0
    for x in args:
        total += x
    return total

print(sum_all(1,2,3,4.5))",
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s9-apply-discount",
                    "Keyword-only option",
                    "Write apply_discount(price, *, rate=0.1) that returns price*(1-rate).",
                )
                .with_solution(
                    r"def apply_discount(price: float, *, rate: float = 0.1) -> float:
    return price * (1 - rate)

print(apply_discount(100.0))
print(apply_discount(100.0, rate=0.25))",
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s9-top-n",
                    "Top-N with key (lambda)",
                    "Write top_n(items, n=3, key=None) that returns the largest n items using sorted(..., key=key).",
                )
                .with_solution(
                    r#"from typing import Callable, Iterable, Any

def top_n(items: Iterable[Any], n: int = 3, key: Callable[[Any], Any] | None = None):
    return sorted(items, key=key, reverse=True)[:n]

print(top_n(["aa","b","cccc"], n=2, key=len))"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s9-multiplier-factory",
                    "Closure factory",
                    "Write make_multiplier(n) that returns a function f(x)=n*x. Show f(10) when n=3.",
                )
                .with_solution(
                    r"def make_multiplier(n: int):
    def mul(x: int) -> int:
        return n * x
    return mul

times3 = make_multiplier(3)
print(times3(10))  # 30",
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s9-fix-mutable-default",
                    "Fix the mutable default bug",
                    "Refactor add_item_bad(x, bucket=[]) to the safe None pattern.",
                )
                .with_starter_code(
                    r"def add_item_bad(x, bucket=[]):
    bucket.append(x)
    return bucket",
                )
                .with_solution(
                    r"def add_item_ok(x, bucket=None):
    if bucket is None:
        bucket = []
    bucket.append(x)
    return bucket",
                ),
            ),
    ]
}
