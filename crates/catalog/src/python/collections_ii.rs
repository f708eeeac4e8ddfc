use course_core::model::{CodeSample, Lesson, PracticeItem, StartHere, Subsection};

pub(crate) fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new(
            "collections-ii",
            "Section 8 — Collections II (Dicts & Sets, Comprehensions & Useful Data Structures)",
        )
            .with_summary(
                "Dictionaries & sets, common operations, comprehensions, and handy containers from collections/heapq.",
            )
            .with_duration(60)
            .with_content(
                "Store key→value pairs with dict, unique items with set, build new containers quickly with comprehensions, and reach for purpose-built structures when needed.",
            )
            .with_start_here(
                StartHere::new([
                    "Create/modify dictionaries; iterate keys/values/items, and merge safely.",
                    "Use sets for uniqueness and fast membership; apply set algebra.",
                    "Write list/dict/set comprehensions (with filters & simple transforms).",
                    "Know when to use Counter, defaultdict, deque, heapq, and dataclasses.",
                ])
                .with_prerequisites(["Section 7 — Collections I (Lists & Tuples)"])
                .with_resource(
                    "Dicts (docs)",
                    "https://docs.python.org/3/library/stdtypes.html#mapping-types-dict",
                )
                .with_resource("Sets (docs)", "https://docs.python.org/3/library/stdtypes.html#set")
                .with_resource(
                    "collections module",
                    "https://docs.python.org/3/library/collections.html",
                )
                .with_resource("heapq", "https://docs.python.org/3/library/heapq.html")
                .with_tip(
                    "Dict keys and set items must be hashable (immutable) — e.g., str, int, tuple. Lists/dicts cannot be keys.",
                ),
            )
            .with_subsection(
                Subsection::new(
                    "dict-basics",
                    "Dictionaries: key → value basics",
                    r"A **dict** maps keys to values. Keys must be hashable (immutable). Common ops: read/write with `[]`, safe read with `.get()`, add/update with `[]` or `.update()`, delete with `del` or `.pop()`. Merge with `|\` (3.9+).",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Create & access",
                        r#"user = {"name": "Asha", "age": 12}
print(user["name"])          # Asha
user["city"] = "Pune"        # add/update
print(user.get("email"))     # None (safe)
print(user.get("email", "")) # '' default"#,
                    ),
                    CodeSample::labeled(
                        "Delete & merge",
                        r#"del user["age"]
removed = user.pop("city", "N/A")  # returns removed value
a = {"x": 1, "y": 2}
b = {"y": 20, "z": 3}
c = a | b        # Python 3.9+: merge, right wins
print(c)         # {'x':1,'y':20,'z':3}"#,
                    ),
                    CodeSample::labeled(
                        "Nested dict",
                        r#"profile = {
    "name": "Raj",
    "scores": {"math": 92, "eng": 85}
}
print(profile["scores"]["math"])  # 92"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "dict-iterate",
                    "Iterating dicts & transforming with comprehension",
                    r"Loop over keys (default), values with `.values()`, pairs with `.items()`.  
Dict comprehensions build new dicts from sequences or existing dicts, often with a simple transform or filter.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Iterate",
                        r#"prices = {"apple": 99, "banana": 40}
for k in prices:              # keys
    print(k, prices[k])
for v in prices.values():     # values
    print(v)
for k, v in prices.items():   # pairs
    print(k, v)"#,
                    ),
                    CodeSample::labeled(
                        "Dict comprehension",
                        r#"names = ["mia","lee","ASHA"]
norm = {n.lower(): len(n) for n in names}
print(norm)  # {'mia':3,'lee':3,'asha':4}

# filter: keep only expensive items
prices = {"apple":99,"banana":40,"cherry":120}
exp = {k:v for k,v in prices.items() if v >= 100}
print(exp)   # {'cherry': 120}"#,
                    ),
                    CodeSample::labeled(
                        "Sort by value (view)",
                        r#"scores = {"Asha":94, "Raj":88, "Mia":79}
for name, sc in sorted(scores.items(), key=lambda kv: kv[1], reverse=True):
    print(name, sc)"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "sets-basics",
                    "Sets: uniqueness & set algebra",
                    r"A **set** holds unique, unordered items. Fast membership tests. Use set algebra: union `|\`, intersection `&\`, difference `-\`, symmetric diff `^\`.  
Methods: `.add()`, `.update()`, `.remove()` (KeyError) vs `.discard()` (safe), `.pop()`. Use `frozenset` for an immutable set (hashable).",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Create & membership",
                        r"s = {1, 2, 2, 3}
print(s)            # {1,2,3}
print(2 in s)       # True
empty = set()       # {} would be a dict",
                    ),
                    CodeSample::labeled(
                        "Algebra",
                        r"a = {1,2,3}; b = {3,4,5}
print(a | b)   # {1,2,3,4,5}
print(a & b)   # {3}
print(a - b)   # {1,2}
print(a ^ b)   # {1,2,4,5}",
                    ),
                    CodeSample::labeled(
                        "Modify safely",
                        r"s = {1,2}
s.add(3)         # {1,2,3}
s.discard(9)     # no error
# s.remove(9)    # KeyError
fs = frozenset([1,2])  # immutable",
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "comprehensions",
                    "Comprehensions: list / set / dict",
                    "Comprehensions build containers succinctly. Keep them simple and readable (one loop + small condition). For complex logic, use normal loops.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "List & set comps",
                        r"nums = [1,2,3,4,5,6]
squares = [x*x for x in nums]                # list
evens = {x for x in nums if x % 2 == 0}      # set
print(squares, evens)",
                    ),
                    CodeSample::labeled(
                        "Dict comp (transform)",
                        r#"prices = {"apple": 99, "banana": 40}
with_tax = {k: round(v*1.18, 2) for k, v in prices.items()}
print(with_tax)"#,
                    ),
                    CodeSample::labeled(
                        "Nested loops (small only)",
                        r#"pairs = [(x,y) for x in [1,2,3] for y in ["a","b"]]
print(pairs)   # [(1,'a'), (1,'b'), (2,'a'), ...]"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "useful-ds",
                    "Useful data structures: Counter, defaultdict, deque, heapq, dataclass",
                    "Reach for the **collections** and **heapq** modules when tasks match these patterns: counting, grouping, queues/stacks, top-k, and simple records.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Counter (frequencies)",
                        r#"from collections import Counter
words = "red blue red green blue blue".split()
cnt = Counter(words)
print(cnt)          # Counter({'blue':3,'red':2,'green':1})
print(cnt.most_common(2))  # top-2"#,
                    ),
                    CodeSample::labeled(
                        "defaultdict (grouping)",
                        r#"from collections import defaultdict
by_len: dict[int, list[str]] = defaultdict(list)
for w in ["a","to","tea","go","from"]:
    by_len[len(w)].append(w)
print(dict(by_len))"#,
                    ),
                    CodeSample::labeled(
                        "deque (fast ends)",
                        r"from collections import deque
dq = deque([1,2])
dq.append(3); dq.appendleft(0)
print(dq)           # deque([0,1,2,3])
dq.pop(); dq.popleft()
print(dq)           # deque([1,2])",
                    ),
                    CodeSample::labeled(
                        "heapq (top-k / priority)",
                        r"import heapq
nums = [7,2,9,4,1,8]
print(heapq.nsmallest(3, nums))  # [1,2,4]
print(heapq.nlargest(2, nums))   # [9,8]",
                    ),
                    CodeSample::labeled(
                        "dataclass (simple records)",
                        r#"from dataclasses import dataclass
@dataclass
class Student:
    name: str
    score: int = 0

s = Student("Asha", 92)
print(s)            # Student(name='Asha', score=92)"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "pitfalls",
                    "Pitfalls & tips",
                    r"• Keys/items must be hashable: tuples okay; lists/dicts are not.  
• Don’t mutate a dict/set while iterating it; iterate over a copy or collect changes.  
• Dict `.update()` and merge `|\` overwrite existing keys (right-hand wins).  
• Copying: `d.copy()` and `set(s)` are shallow. Use `copy.deepcopy` for nested structures.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Bad key vs good key",
                        r#"# bad: TypeError: unhashable type: 'list'
# d = {[1,2]: "oops"}

good = {(1,2): "ok"}   # tuple is hashable
print(good[(1,2)])"#,
                    ),
                    CodeSample::labeled(
                        "Iterate while mutating (avoid)",
                        r#"d = {"a":1,"bad":0,"b":2}
# BAD:
# for k in d:
#     if k == "bad":
#         del d[k]

# Good: build new
clean = {k:v for k,v in d.items() if k != "bad"}
print(clean)"#,
                    ),
                ]),
            )
            .with_practice(
                PracticeItem::new(
                    "s8-word-count",
                    "Word count",
                    "Given a line of text, print word → frequency sorted by highest count.",
                )
                .with_starter_code(
                    r#"line = input("Text: ")
# normalize: lower() and split()"#,
                )
                .with_solution(
                    r"from collections import Counter
cnt = Counter(line.lower().split())
for w, c in cnt.most_common():
    print(w, c)",
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s8-invert-groups",
                    "Invert mapping into groups",
                    "Given student→grade dict, build grade→[students] dict (grouping).",
                )
                .with_starter_code(r#"grades = {"Asha":"A","Raj":"B","Mia":"A","Lee":"C"}"#)
                .with_solution(
                    r"from collections import defaultdict
out: dict[str, list[str]] = defaultdict(list)
for name, g in grades.items():
    out[g].append(name)
print(dict(out))",
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s8-set-ops",
                    "Email campaign set ops",
                    "Given two email lists (A and B), print: common, only in A, only in B.",
                )
                .with_starter_code(
                    r#"A = {"a@x.com","b@x.com","c@x.com"}
B = {"b@x.com","d@x.com"}"#,
                )
                .with_solution(
                    r#"print("common:", A & B)
print("only A:", A - B)
print("only B:", B - A)"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s8-price-merge",
                    "Merge price catalogs (right wins)",
                    "Merge two dicts of prices with the right dict taking priority, then list items >= 100.",
                )
                .with_starter_code(
                    r#"old = {"apple": 90, "banana": 40}
new = {"banana": 45, "cherry": 120}"#,
                )
                .with_solution(
                    r#"merged = old | new
exp = {k:v for k,v in merged.items() if v >= 100}
print(merged)
print("expensive:", exp)"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s8-top3",
                    "Top 3 numbers",
                    "Read N numbers (space-separated) and print the largest 3 using heapq.",
                )
                .with_solution(
                    r"import heapq
nums = list(map(int, input().split()))
print(heapq.nlargest(3, nums))",
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s8-unique-words",
                    "Unique words (case-insensitive) sorted",
                    "Read a sentence and print sorted unique lowercase words.",
                )
                .with_solution(
                    r"words = {w.lower() for w in input().split()}
print(sorted(words))",
                ),
            ),
    ]
}
